//! Response builders for API Gateway proxy responses.

use serde::Serialize;
use serde_json::{Value, json};

use crate::errors::SummarizationError;

/// Returns a JSON response with the given status code.
#[must_use]
pub fn json_response<T: Serialize>(status_code: u16, body: &T) -> Value {
    let body = serde_json::to_string(body).unwrap_or_else(|_| "{}".to_string());
    json!({
        "statusCode": status_code,
        "headers": { "Content-Type": "application/json" },
        "body": body
    })
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json_response(status_code, &json!({ "error": message }))
}

#[must_use]
pub fn not_found() -> Value {
    err_response(404, "Not found")
}

/// Maps a summarization failure to its HTTP status.
#[must_use]
pub fn status_for(error: &SummarizationError) -> u16 {
    match error {
        SummarizationError::Validation { .. } => 422,
        SummarizationError::Capability(_) => 502,
    }
}

#[must_use]
pub fn summarization_error_response(error: &SummarizationError) -> Value {
    err_response(status_for(error), &error.message())
}
