//! Typed access to fields of a raw JSON record.

use serde_json::{Map, Value};

use crate::error::{ApiError, ApiResult};

pub(crate) type RawRecord = Map<String, Value>;

/// Views `raw` as a JSON object.
pub(crate) fn as_record<'a>(raw: &'a Value, kind: &str) -> ApiResult<&'a RawRecord> {
    raw.as_object()
        .ok_or_else(|| ApiError::coercion(kind, raw, "a JSON object"))
}

/// Returns the value under `key`, failing if the key is absent.
pub(crate) fn field<'a>(record: &'a RawRecord, key: &str) -> ApiResult<&'a Value> {
    record
        .get(key)
        .ok_or_else(|| ApiError::MissingField(key.to_string()))
}

/// Converts a JSON value to an integer.
///
/// Integers, integral floats and numeric strings are accepted. Fractional
/// floats such as `1.5` are rejected rather than truncated, and booleans are
/// rejected rather than read as `0`/`1`.
pub(crate) fn coerce_int(key: &str, value: &Value) -> ApiResult<i64> {
    let coerced = match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    coerced.ok_or_else(|| ApiError::coercion(key, value, "an integer"))
}

/// Converts a JSON value to a string. Numbers are rendered as text.
fn coerce_string(key: &str, value: &Value) -> ApiResult<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(ApiError::coercion(key, other, "a string")),
    }
}

pub(crate) fn int_field(record: &RawRecord, key: &str) -> ApiResult<i64> {
    coerce_int(key, field(record, key)?)
}

/// Integer field whose value may be null.
pub(crate) fn opt_int_field(record: &RawRecord, key: &str) -> ApiResult<Option<i64>> {
    match field(record, key)? {
        Value::Null => Ok(None),
        value => coerce_int(key, value).map(Some),
    }
}

pub(crate) fn string_field(record: &RawRecord, key: &str) -> ApiResult<String> {
    coerce_string(key, field(record, key)?)
}

/// String field whose value may be null.
pub(crate) fn opt_string_field(record: &RawRecord, key: &str) -> ApiResult<Option<String>> {
    match field(record, key)? {
        Value::Null => Ok(None),
        value => coerce_string(key, value).map(Some),
    }
}
