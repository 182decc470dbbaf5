//! HTTP handlers: parse the request, enforce roles, call the service, and
//! let `AppError`'s response mapping pick the status code.

pub mod answer;
pub mod question;

use crate::error::AppError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Parse a path id. Malformed ids are the caller's fault (400).
pub(crate) fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid question id '{id_str}'")))
}

/// Decode a JSON body into a typed payload; a missing or mistyped field is
/// a validation failure, not a transport error.
pub(crate) fn decode_body<T: DeserializeOwned>(body: Value) -> Result<T, AppError> {
    serde_json::from_value(body)
        .map_err(|e| AppError::Validation(format!("a mandatory argument is missing: {e}")))
}
