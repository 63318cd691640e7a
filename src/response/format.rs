//! Per-shape response formatting.
//!
//! # Responsibilities
//! - Produce the `{statusCode, headers, body}` envelope for every value shape
//! - Apply the default-then-override header precedence
//! - Degrade serialization failures into an error-shaped body
//!
//! # Design Decisions
//! - Formatting is pure and total: no I/O, no logging, no failure path out
//! - The body is always a string, never a raw structure
//! - Literal responses force `Content-Type: text/plain` after caller
//!   overrides, so a caller cannot change the content type for literals

use serde::{Deserialize, Serialize};

use crate::error::ErrorLike;
use crate::headers::{default_headers, merge_headers, HeaderMap, CONTENT_TYPE, TEXT_PLAIN};
use crate::response::value::{Literal, ResponseValue};

/// The gateway proxy response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    pub status_code: u16,
    pub headers: HeaderMap,
    pub body: String,
}

/// Format a classified value into a proxy response.
///
/// `status` and `headers` override the per-shape defaults; see the rules on
/// each formatter below. Formatting the same inputs twice yields identical
/// envelopes.
pub fn format(value: ResponseValue, status: Option<u16>, headers: Option<HeaderMap>) -> ProxyResponse {
    match value {
        ResponseValue::Error(err) => format_error(err.as_ref(), status, headers),
        ResponseValue::Object(obj) => format_serializable(&obj, status, headers),
        ResponseValue::Literal(lit) => format_literal(&lit, status, headers),
        ResponseValue::Absent => format_absent(status, headers),
        ResponseValue::Callable => format_callable(headers),
    }
}

/// Format an arbitrary serializable payload as an object response.
///
/// Status defaults to 200. If the payload fails to encode, the body degrades
/// to an error message and the intended status code is kept; the failure is
/// never propagated.
pub fn format_serializable<T>(payload: &T, status: Option<u16>, headers: Option<HeaderMap>) -> ProxyResponse
where
    T: Serialize + ?Sized,
{
    let body = match serde_json::to_string(payload) {
        Ok(body) => body,
        Err(err) => message_body(&format!("ERROR: Unable to convert response to JSON '{}'", err)),
    };
    ProxyResponse {
        status_code: status.unwrap_or(200),
        headers: merge_headers([default_headers(), headers.unwrap_or_default()]),
        body,
    }
}

/// Error rule: explicit status, else the error's own, else 500; explicit
/// headers, else the error's own; body is the message wrapped in JSON.
fn format_error(err: &dyn ErrorLike, status: Option<u16>, headers: Option<HeaderMap>) -> ProxyResponse {
    let overlay = headers
        .or_else(|| err.headers().cloned())
        .unwrap_or_default();
    ProxyResponse {
        status_code: status.or_else(|| err.status()).unwrap_or(500),
        headers: merge_headers([default_headers(), overlay]),
        body: message_body(&err.message()),
    }
}

/// Literal rule: status defaults to 200, content type forced to text/plain.
fn format_literal(literal: &Literal, status: Option<u16>, headers: Option<HeaderMap>) -> ProxyResponse {
    ProxyResponse {
        status_code: status.unwrap_or(200),
        headers: plain_text_headers(headers),
        body: literal.to_string(),
    }
}

/// Absent rule: literal-shaped headers, empty body.
fn format_absent(status: Option<u16>, headers: Option<HeaderMap>) -> ProxyResponse {
    ProxyResponse {
        status_code: status.unwrap_or(200),
        headers: plain_text_headers(headers),
        body: String::new(),
    }
}

/// Callable rule: fixed 502 Bad Gateway, caller headers still merged.
fn format_callable(headers: Option<HeaderMap>) -> ProxyResponse {
    ProxyResponse {
        status_code: 502,
        headers: merge_headers([default_headers(), headers.unwrap_or_default()]),
        body: message_body("ERROR: Unable to convert function to JSON"),
    }
}

fn plain_text_headers(overlay: Option<HeaderMap>) -> HeaderMap {
    let forced = HeaderMap::from([(CONTENT_TYPE.to_string(), TEXT_PLAIN.to_string())]);
    merge_headers([default_headers(), overlay.unwrap_or_default(), forced])
}

fn message_body(message: &str) -> String {
    serde_json::json!({ "message": message }).to_string()
}
