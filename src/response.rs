//! Classifies HTTP responses from the Motus API.

use serde_json::Value;
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::fetch::RawResponse;

/// Pulls the server's `errorMsg` out of a response body.
///
/// Absent field, non-object payload or a body that is not JSON all give an
/// empty reason.
pub fn error_reason(body: &[u8]) -> String {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => match map.get("errorMsg") {
            Some(Value::String(msg)) => msg.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        },
        _ => String::new(),
    }
}

/// Returns the parsed body for a success status, the typed error otherwise.
///
/// # Errors
///
/// - 400, 401, 404, 409 and 500 map to their [`ApiError`] kinds carrying the
///   server's `errorMsg`.
/// - Any other non-success status gives [`ApiError::UnexpectedStatus`].
/// - A success body that is not JSON gives [`ApiError::Json`].
pub fn handle_result(resp: &RawResponse) -> ApiResult<Value> {
    debug!(status = resp.status, bytes = resp.body.len(), "Dispatching response");

    match resp.status {
        200 | 201 | 202 => Ok(serde_json::from_slice(&resp.body)?),
        400 => Err(ApiError::BadRequest(error_reason(&resp.body))),
        401 => Err(ApiError::Authentication(error_reason(&resp.body))),
        404 => Err(ApiError::NotFound(error_reason(&resp.body))),
        409 => Err(ApiError::Conflict(error_reason(&resp.body))),
        500 => Err(ApiError::Server(error_reason(&resp.body))),
        other => Err(ApiError::UnexpectedStatus(other)),
    }
}
