//! Error values as response data.
//!
//! # Responsibilities
//! - Define the `ErrorLike` capability the formatter reads status, headers,
//!   and message from
//! - Provide `HttpError`, a concrete error carrying gateway metadata
//!
//! # Design Decisions
//! - Error values are data to classify and render, never control flow:
//!   the formatter takes them as input and always produces a response
//! - Field conventions follow the common http-errors shape: `status`,
//!   optional per-error `headers`, `expose` defaulting to true only for
//!   non-5xx statuses
//! - Arbitrary `std::error::Error` values adapt via `HttpError::wrap`,
//!   which captures the display message and carries no status

use crate::headers::HeaderMap;

/// Capability the response formatter reads error metadata through.
///
/// Any value implementing this is formatted as an error-shaped response:
/// its status (defaulting to 500) becomes the status code and its message
/// becomes the `{"message": ...}` body.
pub trait ErrorLike: std::fmt::Debug {
    /// Short, single-line message rendered into the response body.
    fn message(&self) -> String;

    /// Status code declared by the error, if any.
    fn status(&self) -> Option<u16> {
        None
    }

    /// Headers the error wants sent to the client, if any.
    fn headers(&self) -> Option<&HeaderMap> {
        None
    }

    /// Whether the message is safe to send to the client.
    /// Defaults to true for non-5xx statuses, false otherwise.
    fn expose(&self) -> bool {
        matches!(self.status(), Some(s) if s < 500)
    }
}

/// An error carrying HTTP gateway metadata.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct HttpError {
    /// Status code for the response; `None` falls back to 500.
    pub status: Option<u16>,

    /// Message rendered into the response body.
    pub message: String,

    /// Headers to send with the response.
    pub headers: Option<HeaderMap>,

    /// Whether the message is safe to send to the client.
    pub expose: bool,
}

impl HttpError {
    /// Create an error with an explicit status and message.
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
            headers: None,
            expose: status < 500,
        }
    }

    /// Create a status-less error from a message alone.
    pub fn msg(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
            headers: None,
            expose: false,
        }
    }

    /// Adapt an arbitrary error; captures its display message, no status.
    pub fn wrap(err: &(dyn std::error::Error + '_)) -> Self {
        Self::msg(err.to_string())
    }

    /// Attach headers to send with the response.
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = Some(headers);
        self
    }

    /// 400 with its canonical reason phrase.
    pub fn bad_request() -> Self {
        Self::new(400, "Bad Request")
    }

    /// 401 with its canonical reason phrase.
    pub fn unauthorized() -> Self {
        Self::new(401, "Unauthorized")
    }

    /// 403 with its canonical reason phrase.
    pub fn forbidden() -> Self {
        Self::new(403, "Forbidden")
    }

    /// 404 with its canonical reason phrase.
    pub fn not_found() -> Self {
        Self::new(404, "Not Found")
    }

    /// 409 with its canonical reason phrase.
    pub fn conflict() -> Self {
        Self::new(409, "Conflict")
    }

    /// 500 with its canonical reason phrase.
    pub fn internal_server_error() -> Self {
        Self::new(500, "Internal Server Error")
    }

    /// 502 with its canonical reason phrase.
    pub fn bad_gateway() -> Self {
        Self::new(502, "Bad Gateway")
    }

    /// 503 with its canonical reason phrase.
    pub fn service_unavailable() -> Self {
        Self::new(503, "Service Unavailable")
    }
}

impl ErrorLike for HttpError {
    fn message(&self) -> String {
        self.message.clone()
    }

    fn status(&self) -> Option<u16> {
        self.status
    }

    fn headers(&self) -> Option<&HeaderMap> {
        self.headers.as_ref()
    }

    fn expose(&self) -> bool {
        self.expose
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_constructors() {
        let err = HttpError::not_found();
        assert_eq!(err.status, Some(404));
        assert_eq!(err.message, "Not Found");
        assert!(err.expose);

        let err = HttpError::bad_gateway();
        assert_eq!(err.status, Some(502));
        assert!(!err.expose); // 5xx not exposed by default
    }

    #[test]
    fn test_expose_defaults() {
        assert!(HttpError::new(404, "missing").expose);
        assert!(!HttpError::new(500, "boom").expose);
        assert!(!HttpError::msg("no status").expose);
    }

    #[test]
    fn test_wrap_captures_display_message() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        let err = HttpError::wrap(&io);
        assert_eq!(err.message, "disk on fire");
        assert_eq!(err.status, None);
    }

    #[test]
    fn test_with_headers() {
        let headers = HeaderMap::from([("my-header".to_string(), "val".to_string())]);
        let err = HttpError::not_found().with_headers(headers);
        assert_eq!(err.headers().unwrap().get("my-header").unwrap(), "val");
    }

    #[test]
    fn test_display_is_message() {
        assert_eq!(HttpError::not_found().to_string(), "Not Found");
    }
}
