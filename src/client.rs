//! High-level Motus API client.

use chrono::Utc;
use reqwest::Url;
use serde_json::Value;
use tracing::{debug, info};

use crate::config::ClientConfig;
use crate::error::ApiResult;
use crate::fetch::{BasicClient, HttpClient, fetch_json};
use crate::records::{Project, Receiver, records_from_data};
use crate::request::{RequestParams, build_url};

pub const RECEIVERS_ENDPOINT: &str = "receivers";
pub const PROJECTS_ENDPOINT: &str = "projects";

/// Client for the Motus API.
///
/// Generic over the transport so tests can substitute a stub for
/// [`BasicClient`].
pub struct MotusClient<C = BasicClient> {
    config: ClientConfig,
    http: C,
}

impl MotusClient<BasicClient> {
    /// Creates a client using the `reqwest` transport.
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        config.validate()?;
        let http = BasicClient::new(&config)?;
        Ok(Self { config, http })
    }

    /// Creates a client from `MOTUS_*` environment variables.
    pub fn from_env() -> ApiResult<Self> {
        Self::new(ClientConfig::from_env()?)
    }
}

impl<C: HttpClient> MotusClient<C> {
    pub fn with_transport(config: ClientConfig, http: C) -> ApiResult<Self> {
        config.validate()?;
        Ok(Self { config, http })
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Current time formatted as the request `date` stamp.
    pub fn date(&self) -> String {
        crate::timestamp::date()
    }

    /// Builds the URL for a request without sending it.
    ///
    /// `api_key` and `serial_number` fall back to the configured defaults
    /// when `None`.
    pub fn build_url(
        &self,
        endpoint: &str,
        params: RequestParams,
        api_key: Option<&str>,
        serial_number: Option<&str>,
    ) -> ApiResult<Url> {
        build_url(
            &self.config,
            endpoint,
            params,
            api_key.or(self.config.api_key.as_deref()),
            serial_number.or(self.config.serial_number.as_deref()),
            Utc::now(),
        )
    }

    /// Performs a GET against `endpoint` and returns the parsed JSON body.
    ///
    /// # Errors
    ///
    /// URL construction errors, transport failures and the status errors
    /// described in [`crate::response::handle_result`].
    #[tracing::instrument(skip(self, params, api_key, serial_number))]
    pub fn get(
        &self,
        endpoint: &str,
        params: RequestParams,
        api_key: Option<&str>,
        serial_number: Option<&str>,
    ) -> ApiResult<Value> {
        let url = self.build_url(endpoint, params, api_key, serial_number)?;
        let body = fetch_json(&self.http, &url)?;
        debug!("Request succeeded");
        Ok(body)
    }

    /// Lists every receiver deployment.
    #[tracing::instrument(skip(self))]
    pub fn list_receivers(&self) -> ApiResult<Vec<Receiver>> {
        let payload = self.get(RECEIVERS_ENDPOINT, RequestParams::new(), None, None)?;
        let receivers: Vec<Receiver> = records_from_data(&payload)?;
        info!(count = receivers.len(), "Receivers fetched");
        Ok(receivers)
    }

    /// Lists every project.
    #[tracing::instrument(skip(self))]
    pub fn list_projects(&self) -> ApiResult<Vec<Project>> {
        let payload = self.get(PROJECTS_ENDPOINT, RequestParams::new(), None, None)?;
        let projects: Vec<Project> = records_from_data(&payload)?;
        info!(count = projects.len(), "Projects fetched");
        Ok(projects)
    }
}
