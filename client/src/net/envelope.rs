//! Response envelope normalization.
//!
//! DESIGN
//! ======
//! The API wraps some payloads as `{ success, data, message }` and returns
//! others bare. Every endpoint decodes through [`decode`], which accepts both
//! shapes, so call sites never pick an unwrapping strategy per endpoint.

#[cfg(test)]
#[path = "envelope_test.rs"]
mod envelope_test;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ApiError;

const DEFAULT_REJECTION: &str = "request was rejected";

/// Decode a response body that may or may not be wrapped in an envelope.
///
/// An object with a boolean `success` key is always treated as an envelope,
/// so a `data` payload of the wrong shape is a decode error rather than a
/// bare value.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] when the envelope reports failure and
/// [`ApiError::Decode`] when the payload does not match `T`.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let mut value: Value = serde_json::from_str(body).map_err(decode_error)?;
    let Some(success) = value.get("success").and_then(Value::as_bool) else {
        return serde_json::from_value(value).map_err(decode_error);
    };
    if !success {
        let message = value
            .get("message")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_REJECTION);
        return Err(ApiError::Rejected(message.to_owned()));
    }
    match value.get_mut("data").map(Value::take) {
        None | Some(Value::Null) => Err(ApiError::Decode("envelope has no data".to_owned())),
        Some(data) => serde_json::from_value(data).map_err(decode_error),
    }
}

fn decode_error(e: serde_json::Error) -> ApiError {
    ApiError::Decode(e.to_string())
}
