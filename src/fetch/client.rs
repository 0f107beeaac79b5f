use reqwest::Url;

use super::RawResponse;
use crate::error::ApiResult;

/// Blocking transport used by [`crate::client::MotusClient`].
///
/// Implementations only move bytes; status handling belongs to
/// [`crate::response::handle_result`].
pub trait HttpClient: Send + Sync {
    fn get(&self, url: &Url) -> ApiResult<RawResponse>;
}

impl<C: HttpClient + ?Sized> HttpClient for &C {
    fn get(&self, url: &Url) -> ApiResult<RawResponse> {
        (**self).get(url)
    }
}
