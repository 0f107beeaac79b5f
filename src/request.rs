//! Request URL construction.
//!
//! The Motus API takes every parameter as one compact JSON object in the
//! `json` query parameter:
//!
//! ```text
//! GET {base_url}{endpoint}/?json={"date":"20200601090307","login":"..."}
//! ```
//!
//! The JSON is URL-encoded and the length ceiling applies to the encoded URL.

use chrono::{DateTime, Utc};
use reqwest::Url;
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::timestamp::request_date;

/// Request parameters, serialized in insertion order.
pub type RequestParams = Map<String, Value>;

/// Builds the request URL for `endpoint` with the parameters stamped at `now`.
///
/// Injects `date`, then `login`/`pword` when the config carries both
/// credentials, `hash` for a non-empty `api_key` and `serno` for a non-empty
/// `serial_number`.
///
/// # Errors
///
/// [`ApiError::UrlTooLong`] when the finished URL exceeds
/// `config.url_max_length`, [`ApiError::InvalidUrl`] when the base URL and
/// endpoint do not form a URL.
pub fn build_url(
    config: &ClientConfig,
    endpoint: &str,
    mut params: RequestParams,
    api_key: Option<&str>,
    serial_number: Option<&str>,
    now: DateTime<Utc>,
) -> ApiResult<Url> {
    params.insert("date".into(), Value::String(request_date(now)));

    if let Some((user, pass)) = config.credentials() {
        params.insert("login".into(), user.into());
        params.insert("pword".into(), pass.into());
    }
    if let Some(key) = api_key.filter(|k| !k.is_empty()) {
        params.insert("hash".into(), key.into());
    }
    if let Some(serno) = serial_number.filter(|s| !s.is_empty()) {
        params.insert("serno".into(), serno.into());
    }

    let json = serde_json::to_string(&params)?;
    let base = format!(
        "{}/{}/",
        config.base_url.trim_end_matches('/'),
        endpoint.trim_matches('/')
    );
    let url = Url::parse_with_params(&base, &[("json", json.as_str())])
        .map_err(|e| ApiError::InvalidUrl(format!("{base}: {e}")))?;

    let length = url.as_str().len();
    if length > config.url_max_length {
        return Err(ApiError::UrlTooLong {
            length,
            max: config.url_max_length,
        });
    }

    debug!(endpoint, length, "Built request URL");
    trace!(url = %url, "Request URL");
    Ok(url)
}

/// Recovers the JSON parameter object from a URL built by [`build_url`].
pub fn decode_params(url: &Url) -> Option<RequestParams> {
    let (_, json) = url.query_pairs().find(|(k, _)| k == "json")?;
    serde_json::from_str(&json).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 6, 1, 9, 3, 7).unwrap()
    }

    fn params(value: Value) -> RequestParams {
        match value {
            Value::Object(map) => map,
            _ => panic!("params must be an object"),
        }
    }

    #[test]
    fn test_anonymous_request() {
        let config = ClientConfig::default();
        let url = build_url(&config, "receivers", RequestParams::new(), None, None, fixed_now())
            .unwrap();

        assert!(url.as_str().starts_with("https://sandbox.motus.org/api/receivers/?json="));
        let sent = decode_params(&url).unwrap();
        assert_eq!(Value::Object(sent), json!({ "date": "20200601090307" }));
    }

    #[test]
    fn test_json_is_compact_and_ordered() {
        let config = ClientConfig::default();
        let url = build_url(
            &config,
            "projects",
            params(json!({ "projectID": 5, "tagID": 12 })),
            None,
            None,
            fixed_now(),
        )
        .unwrap();

        let (_, raw) = url.query_pairs().find(|(k, _)| k == "json").unwrap();
        assert_eq!(raw, r#"{"projectID":5,"tagID":12,"date":"20200601090307"}"#);
    }

    #[test]
    fn test_credentials_key_and_serial() {
        let config = ClientConfig::default().with_credentials("bird", "seed");
        let url = build_url(
            &config,
            "receivers",
            RequestParams::new(),
            Some("abc123"),
            Some("SG-5113BBBK0173"),
            fixed_now(),
        )
        .unwrap();

        let sent = Value::Object(decode_params(&url).unwrap());
        assert_eq!(
            sent,
            json!({
                "date": "20200601090307",
                "login": "bird",
                "pword": "seed",
                "hash": "abc123",
                "serno": "SG-5113BBBK0173",
            })
        );
    }

    #[test]
    fn test_empty_key_and_serial_are_skipped() {
        let config = ClientConfig::default().with_credentials("bird", "");
        let url =
            build_url(&config, "receivers", RequestParams::new(), Some(""), Some(""), fixed_now())
                .unwrap();

        let sent = decode_params(&url).unwrap();
        assert_eq!(sent.len(), 1);
        assert!(sent.contains_key("date"));
    }

    #[test]
    fn test_url_too_long_reports_length() {
        let config = ClientConfig::default();
        let baseline = build_url(
            &config,
            "receivers",
            params(json!({ "padding": "" })),
            None,
            None,
            fixed_now(),
        )
        .unwrap()
        .as_str()
        .len();

        let padding = "a".repeat(2500);
        let err = build_url(
            &config,
            "receivers",
            params(json!({ "padding": padding })),
            None,
            None,
            fixed_now(),
        )
        .unwrap_err();

        match err {
            ApiError::UrlTooLong { length, max } => {
                assert_eq!(length, baseline + 2500);
                assert_eq!(max, 2000);
            }
            other => panic!("expected UrlTooLong, got {other:?}"),
        }
    }

    #[test]
    fn test_url_at_ceiling_is_accepted() {
        let reference = build_url(
            &ClientConfig::default(),
            "receivers",
            RequestParams::new(),
            None,
            None,
            fixed_now(),
        )
        .unwrap();
        let exact = reference.as_str().len();

        let config = ClientConfig::default().with_url_max_length(exact);
        assert!(
            build_url(&config, "receivers", RequestParams::new(), None, None, fixed_now()).is_ok()
        );

        let config = ClientConfig::default().with_url_max_length(exact - 1);
        assert!(matches!(
            build_url(&config, "receivers", RequestParams::new(), None, None, fixed_now()),
            Err(ApiError::UrlTooLong { .. })
        ));
    }

    #[test]
    fn test_base_url_without_trailing_slash() {
        let mut config = ClientConfig::default();
        config.base_url = "https://sandbox.motus.org/api".into();
        assert!(config.validate().is_ok());

        let url = build_url(&config, "receivers", RequestParams::new(), None, None, fixed_now())
            .unwrap();
        assert_eq!(url.path(), "/api/receivers/");

        let url = build_url(&config, "/projects/", RequestParams::new(), None, None, fixed_now())
            .unwrap();
        assert_eq!(url.path(), "/api/projects/");
    }

    #[test]
    fn test_caller_date_is_overwritten() {
        let url = build_url(
            &ClientConfig::default(),
            "receivers",
            params(json!({ "date": "19700101000000" })),
            None,
            None,
            fixed_now(),
        )
        .unwrap();
        let sent = decode_params(&url).unwrap();
        assert_eq!(sent["date"], "20200601090307");
    }
}
