//! Error-body handling for non-success responses.

use serde_json::Value;

use crate::domain::errors::DEFAULT_FAILURE_MESSAGE;

/// Fields tried, in order, for a human-readable message in an error body.
pub const ERROR_MESSAGE_FIELDS: [&str; 2] = ["detail", "message"];

/// Pull the first non-empty string message out of a JSON error body.
///
/// Anything else (not JSON, no such field, a non-string `detail` such as a
/// validation error list) falls back to [`DEFAULT_FAILURE_MESSAGE`].
pub fn extract_error_message(body: &[u8]) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|value| {
            ERROR_MESSAGE_FIELDS.iter().find_map(|field| {
                value
                    .get(field)
                    .and_then(Value::as_str)
                    .filter(|message| !message.is_empty())
                    .map(str::to_string)
            })
        })
        .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string())
}
