//! Completion-interface adapter.
//!
//! # Responsibilities
//! - Wrap a downstream completion callback into the `(value, status, headers)`
//!   interface handlers invoke
//! - Emit structured events for each formatted response
//!
//! # Design Decisions
//! - The downstream error slot is `Option<Infallible>`: every input shape
//!   formats to a response, so the wrapper can never signal an error and the
//!   type makes that unrepresentable
//! - Logging lives here, not in the formatter, which stays pure

use std::convert::Infallible;

use crate::headers::HeaderMap;
use crate::response::{format, ProxyResponse, ResponseValue};

/// Wrap a downstream completion callback into a response-formatting handler.
///
/// The returned closure classifies nothing itself; callers hand it an
/// already-classified [`ResponseValue`] plus optional status and headers,
/// and the downstream callback always receives `(None, response)`.
pub fn proxy_callback<C>(mut complete: C) -> impl FnMut(ResponseValue, Option<u16>, Option<HeaderMap>)
where
    C: FnMut(Option<Infallible>, ProxyResponse),
{
    move |value, status, headers| {
        if matches!(value, ResponseValue::Callable) {
            tracing::warn!("callable passed as response data, returning 502");
        }
        let response = format(value, status, headers);
        tracing::debug!(status_code = response.status_code, "formatted proxy response");
        complete(None, response);
    }
}
