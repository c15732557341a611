//! API Lambda handler - thin router in front of the summary handler.
//!
//! This module handles:
//! - Request decoding (body, base64, JSON or form fields)
//! - Checks the form would otherwise perform (blank text, parameter ranges)
//! - Summaries as JSON
//! - Download of an already generated summary as `summary.txt`
//! - A health check reporting whether the model is loaded

use lambda_runtime::{Error, LambdaEvent};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::{error, info};
use uuid::Uuid;

use super::{helpers, parsing};
use crate::core::config::AppConfig;
use crate::core::models::{SummaryRequest, SummaryResponse};
use crate::worker::deliver;
use crate::worker::summarize::SummaryRequestHandler;

pub use self::function_handler as handler;

/// Lambda handler for the API entrypoint.
///
/// # Errors
///
/// Returns an error only when the configuration cannot be read; request-level
/// problems are answered with an error status and `{"error": ..}` body.
#[tracing::instrument(level = "info", skip(event))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<impl Serialize, Error> {
    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e.to_string())
    })?;

    let summarizer = SummaryRequestHandler::global(&config);
    Ok(route(summarizer, &event.payload).await)
}

/// Dispatches one proxy event to the matching route.
pub async fn route(summarizer: &SummaryRequestHandler, payload: &Value) -> Value {
    let request_id = Uuid::new_v4();
    let method = parsing::request_method(payload).unwrap_or("POST");
    let path = parsing::request_path(payload).unwrap_or("/");

    info!(%request_id, method, path, "API request");

    match (method, path.trim_end_matches('/')) {
        ("GET", p) if p.ends_with("/health") => health(summarizer),
        ("POST", p) if p.ends_with("/summarize/download") => download(payload),
        ("POST", p) if p.ends_with("/summarize") => summarize(summarizer, payload).await,
        _ => helpers::not_found(),
    }
}

fn health(summarizer: &SummaryRequestHandler) -> Value {
    helpers::json_response(
        200,
        &json!({
            "ok": true,
            "model": summarizer.model_name(),
            "loaded": summarizer.is_loaded(),
        }),
    )
}

fn request_body(payload: &Value) -> Result<(String, Option<&str>), Value> {
    let body = parsing::extract_body(payload).map_err(|e| {
        error!("Request body error: {}", e);
        helpers::err_response(400, &e.to_string())
    })?;

    let content_type = payload
        .get("headers")
        .and_then(|h| parsing::get_header_value(h, "Content-Type"));

    Ok((body, content_type))
}

fn decode_request(payload: &Value) -> Result<SummaryRequest, Value> {
    let (body, content_type) = request_body(payload)?;

    let request = parsing::parse_summary_request(&body, content_type).map_err(|e| {
        error!("Request parse error: {}", e);
        helpers::err_response(400, &e.to_string())
    })?;

    parsing::validate_request(&request).map_err(|reason| helpers::err_response(400, &reason))?;

    Ok(request)
}

async fn summarize(summarizer: &SummaryRequestHandler, payload: &Value) -> Value {
    let request = match decode_request(payload) {
        Ok(r) => r,
        Err(response) => return response,
    };

    match summarizer.summarize(&request.text, &request.config).await {
        Ok(result) => helpers::json_response(200, &SummaryResponse::Success(result)),
        Err(e) => helpers::summarization_error_response(&e),
    }
}

/// Serves the summary the client already has; the model is not called again.
fn download(payload: &Value) -> Value {
    let (body, content_type) = match request_body(payload) {
        Ok(parts) => parts,
        Err(response) => return response,
    };

    match parsing::parse_download_request(&body, content_type) {
        Ok(d) if crate::utils::text::is_blank(&d.summary_text) => {
            helpers::err_response(400, parsing::EMPTY_SUMMARY_MESSAGE)
        }
        Ok(d) => deliver::download_response(&d.summary_text),
        Err(e) => {
            error!("Download parse error: {}", e);
            helpers::err_response(400, &e.to_string())
        }
    }
}
