//! Timestamp handling for the Motus API.
//!
//! Requests carry a `date` stamp in `YYYYMMDDhhmmss` (UTC); responses carry
//! offset-aware timestamps such as `2019-07-27 12:05:15 -04:00`.

use chrono::{DateTime, FixedOffset, Utc};

use crate::error::{ApiError, ApiResult};

/// Format of the `date` parameter every request carries.
pub const REQUEST_DATE_FORMAT: &str = "%Y%m%d%H%M%S";

/// Format of timestamps in API payloads. `%z` accepts `-04:00` and `-0400`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Formats `now` as a request `date` stamp.
pub fn request_date(now: DateTime<Utc>) -> String {
    now.format(REQUEST_DATE_FORMAT).to_string()
}

/// Returns the current time as a request `date` stamp.
pub fn date() -> String {
    request_date(Utc::now())
}

/// Parses an API timestamp into an offset-aware [`DateTime`].
///
/// # Errors
///
/// Returns [`ApiError::TimestampParse`] if `value` is not in
/// [`TIMESTAMP_FORMAT`]. No other format is attempted.
pub fn parse_timestamp(value: &str) -> ApiResult<DateTime<FixedOffset>> {
    DateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|source| ApiError::TimestampParse {
        value: value.to_string(),
        source,
    })
}
