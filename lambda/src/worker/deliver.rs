//! Delivery of a finished summary as a downloadable file.

use serde_json::{Value, json};

pub const SUMMARY_FILENAME: &str = "summary.txt";

/// Returns a 200 response that makes the browser save `summary.txt`.
#[must_use]
pub fn download_response(summary_text: &str) -> Value {
    json!({
        "statusCode": 200,
        "headers": {
            "Content-Type": "text/plain; charset=utf-8",
            "Content-Disposition": format!("attachment; filename=\"{SUMMARY_FILENAME}\""),
        },
        "body": summary_text,
    })
}
