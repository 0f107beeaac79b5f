//! Typed records built from API payloads.

mod fields;
pub mod project;
pub mod receiver;

pub use project::Project;
pub use receiver::Receiver;

use serde_json::Value;

use crate::error::{ApiError, ApiResult};

/// A record that can be built from one raw JSON element.
pub trait FromRaw: Sized {
    fn from_raw(raw: &Value) -> ApiResult<Self>;
}

/// Builds one record per element of the payload's `data` array.
///
/// # Errors
///
/// [`ApiError::MissingField`] when `data` is absent,
/// [`ApiError::FieldCoercion`] when it is not an array, and the first
/// element error otherwise.
pub fn records_from_data<T: FromRaw>(payload: &Value) -> ApiResult<Vec<T>> {
    let data = payload
        .get("data")
        .ok_or_else(|| ApiError::MissingField("data".to_string()))?;

    data.as_array()
        .ok_or_else(|| ApiError::coercion("data", data, "an array"))?
        .iter()
        .map(T::from_raw)
        .collect()
}
