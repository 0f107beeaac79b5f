use super::client::HttpClient;
use super::RawResponse;
use crate::config::ClientConfig;
use crate::error::ApiResult;
use reqwest::Url;
use tracing::debug;

/// [`HttpClient`] backed by a blocking `reqwest` client.
pub struct BasicClient(reqwest::blocking::Client);

impl BasicClient {
    /// Builds a client honouring the timeouts in `config`.
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        let inner = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(concat!("motus_api/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self(inner))
    }
}

impl HttpClient for BasicClient {
    fn get(&self, url: &Url) -> ApiResult<RawResponse> {
        let resp = self.0.get(url.clone()).send()?;
        let status = resp.status().as_u16();
        let body = resp.bytes()?.to_vec();
        debug!(status, bytes = body.len(), "Response received");
        Ok(RawResponse { status, body })
    }
}
