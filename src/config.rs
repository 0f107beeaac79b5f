//! Configuration for the Motus API client
//!
//! Defaults target the Motus sandbox; every field can be overridden from the
//! environment or with the builder methods.

use crate::error::{ApiError, ApiResult};
use std::time::Duration;

/// Default Motus API base URL (sandbox)
pub const DEFAULT_BASE_URL: &str = "https://sandbox.motus.org/api/";

/// Longest request URL the client will send
pub const DEFAULT_URL_MAX_LENGTH: usize = 2000;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL; the endpoint is joined with a single `/` either way
    pub base_url: String,
    pub username: Option<String>,
    pub password: Option<String>,
    /// API key sent as `hash` when a call does not supply its own
    pub api_key: Option<String>,
    /// Device serial number sent as `serno` when a call does not supply its own
    pub serial_number: Option<String>,
    pub url_max_length: usize,
    /// Request timeout
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            username: None,
            password: None,
            api_key: None,
            serial_number: None,
            url_max_length: DEFAULT_URL_MAX_LENGTH,
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Create configuration from environment variables
    ///
    /// Reads the following environment variables:
    /// - `MOTUS_BASE_URL`: API base URL
    /// - `MOTUS_USERNAME` / `MOTUS_PASSWORD`: account credentials
    /// - `MOTUS_API_KEY`: default API key
    /// - `MOTUS_SERIAL_NUMBER`: default device serial number
    /// - `MOTUS_URL_MAX_LENGTH`: URL length ceiling
    /// - `MOTUS_TIMEOUT_SECS`: request timeout in seconds
    /// - `MOTUS_CONNECT_TIMEOUT_SECS`: connect timeout in seconds
    pub fn from_env() -> ApiResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> ApiResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut config = Self::default();

        if let Some(url) = non_empty("MOTUS_BASE_URL") {
            config = config.with_base_url(url);
        }
        config.username = non_empty("MOTUS_USERNAME");
        config.password = non_empty("MOTUS_PASSWORD");
        config.api_key = non_empty("MOTUS_API_KEY");
        config.serial_number = non_empty("MOTUS_SERIAL_NUMBER");

        if let Some(raw) = non_empty("MOTUS_URL_MAX_LENGTH") {
            config.url_max_length = raw.trim().parse().map_err(|_| {
                ApiError::config(format!("MOTUS_URL_MAX_LENGTH is not a number: {raw}"))
            })?;
        }

        if let Some(raw) = non_empty("MOTUS_TIMEOUT_SECS") {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                ApiError::config(format!("MOTUS_TIMEOUT_SECS is not a number: {raw}"))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        if let Some(raw) = non_empty("MOTUS_CONNECT_TIMEOUT_SECS") {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                ApiError::config(format!("MOTUS_CONNECT_TIMEOUT_SECS is not a number: {raw}"))
            })?;
            config.connect_timeout = Duration::from_secs(secs);
        }

        config.validate()?;
        Ok(config)
    }

    /// Builder-style method to set base URL. A trailing `/` is added if missing.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let mut url = url.into();
        if !url.is_empty() && !url.ends_with('/') {
            url.push('/');
        }
        self.base_url = url;
        self
    }

    /// Builder-style method to set login credentials
    #[must_use]
    pub fn with_credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    #[must_use]
    pub fn with_serial_number(mut self, serial: impl Into<String>) -> Self {
        self.serial_number = Some(serial.into());
        self
    }

    #[must_use]
    pub fn with_url_max_length(mut self, max: usize) -> Self {
        self.url_max_length = max;
        self
    }

    /// Builder-style method to set timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Returns the credentials when both username and password are non-empty.
    #[must_use]
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.username.as_deref(), self.password.as_deref()) {
            (Some(user), Some(pass)) if !user.is_empty() && !pass.is_empty() => Some((user, pass)),
            _ => None,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> ApiResult<()> {
        if self.base_url.is_empty() {
            return Err(ApiError::config("base_url cannot be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ApiError::config("base_url must start with http:// or https://"));
        }

        if self.timeout.is_zero() {
            return Err(ApiError::config("timeout cannot be zero"));
        }

        if self.connect_timeout.is_zero() {
            return Err(ApiError::config("connect_timeout cannot be zero"));
        }

        if self.url_max_length == 0 {
            return Err(ApiError::config("url_max_length cannot be zero"));
        }

        Ok(())
    }
}
