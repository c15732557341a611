use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;
use url::form_urlencoded;

use crate::core::config::parse_flag;
use crate::core::models::{SummarizationConfig, SummaryDownload, SummaryRequest};
use crate::errors::SummarizerError;

pub const EMPTY_TEXT_MESSAGE: &str = "Please enter some text.";
pub const EMPTY_SUMMARY_MESSAGE: &str = "There is no summary to download.";

pub fn get_header_value<'a>(headers: &'a Value, name: &str) -> Option<&'a str> {
    if let Some(v) = headers.get(name).and_then(|s| s.as_str()) {
        return Some(v);
    }
    headers.as_object().and_then(|map| {
        map.iter().find_map(|(k, v)| {
            if k.eq_ignore_ascii_case(name) {
                v.as_str()
            } else {
                None
            }
        })
    })
}

/// Path of a proxy event, for both the v1 and v2 payload formats.
pub fn request_path(payload: &Value) -> Option<&str> {
    payload
        .get("rawPath")
        .and_then(|v| v.as_str())
        .or_else(|| payload.get("path").and_then(|v| v.as_str()))
}

pub fn request_method(payload: &Value) -> Option<&str> {
    payload
        .get("httpMethod")
        .and_then(|v| v.as_str())
        .or_else(|| {
            payload
                .get("requestContext")
                .and_then(|c| c.get("http"))
                .and_then(|h| h.get("method"))
                .and_then(|v| v.as_str())
        })
}

/// Returns the request body, decoding it when API Gateway base64-encoded it.
pub fn extract_body(payload: &Value) -> Result<String, SummarizerError> {
    let body = payload
        .get("body")
        .and_then(|b| b.as_str())
        .ok_or_else(|| SummarizerError::ParseError("Missing body".to_string()))?;

    let is_base64 = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if !is_base64 {
        return Ok(body.to_string());
    }

    let bytes = STANDARD
        .decode(body)
        .map_err(|e| SummarizerError::ParseError(format!("Invalid base64 body: {e}")))?;
    String::from_utf8(bytes)
        .map_err(|e| SummarizerError::ParseError(format!("Body is not valid UTF-8: {e}")))
}

pub fn is_form_body(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|ct| {
        ct.to_ascii_lowercase()
            .starts_with("application/x-www-form-urlencoded")
    })
}

/// Decodes a summarize request from a JSON or form-encoded body.
pub fn parse_summary_request(
    body: &str,
    content_type: Option<&str>,
) -> Result<SummaryRequest, SummarizerError> {
    if is_form_body(content_type) {
        parse_form_request(body)
    } else {
        serde_json::from_str(body)
            .map_err(|e| SummarizerError::ParseError(format!("Invalid JSON body: {e}")))
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, SummarizerError>
where
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| SummarizerError::ParseError(format!("Invalid value for {key}: {e}")))
}

pub fn parse_form_request(body: &str) -> Result<SummaryRequest, SummarizerError> {
    let mut text = String::new();
    let mut config = SummarizationConfig::default();

    for (key, value) in form_urlencoded::parse(body.as_bytes()) {
        match &*key {
            "text" => text = value.into_owned(),
            "max_length" | "maxLength" => config.max_length = parse_number(&key, &value)?,
            "min_length" | "minLength" => config.min_length = parse_number(&key, &value)?,
            "use_sampling" | "useSampling" => {
                config.use_sampling = parse_flag(&value).ok_or_else(|| {
                    SummarizerError::ParseError(format!("Invalid value for {key}: {value}"))
                })?;
            }
            "temperature" => config.temperature = parse_number(&key, &value)?,
            "top_p" | "topP" => config.top_p = parse_number(&key, &value)?,
            _ => {}
        }
    }

    Ok(SummaryRequest { text, config })
}

/// Decodes the summary text a download request carries.
pub fn parse_download_request(
    body: &str,
    content_type: Option<&str>,
) -> Result<SummaryDownload, SummarizerError> {
    if is_form_body(content_type) {
        let summary_text = form_urlencoded::parse(body.as_bytes())
            .find(|(key, _)| key == "summaryText" || key == "summary_text")
            .map(|(_, value)| value.into_owned())
            .unwrap_or_default();
        Ok(SummaryDownload { summary_text })
    } else {
        serde_json::from_str(body)
            .map_err(|e| SummarizerError::ParseError(format!("Invalid JSON body: {e}")))
    }
}

/// Checks performed by the form before the handler is called.
pub fn validate_request(request: &SummaryRequest) -> Result<(), String> {
    if crate::utils::text::is_blank(&request.text) {
        return Err(EMPTY_TEXT_MESSAGE.to_string());
    }
    request.config.validate()
}
