mod basic;
mod client;

pub use basic::BasicClient;
pub use client::HttpClient;

use reqwest::Url;
use serde_json::Value;

use crate::error::ApiResult;
use crate::response::handle_result;

/// Status and body of an HTTP response, detached from the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Sends a GET for `url` and classifies the response.
pub fn fetch_json<C: HttpClient>(client: &C, url: &Url) -> ApiResult<Value> {
    let resp = client.get(url)?;
    handle_result(&resp)
}
