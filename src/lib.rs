//! Lambda proxy response adapter.
//!
//! Converts arbitrary handler values (errors, structured data, literals,
//! nothing at all) into the `{statusCode, headers, body}` envelope an
//! HTTP-gateway-style proxy expects back, and merges the two parameter
//! mappings carried on an incoming request event.
//!
//! # Architecture Overview
//!
//! ```text
//!   handler value                     request event
//!        │                                 │
//!        ▼                                 ▼
//!   ┌──────────┐   ┌──────────┐      ┌──────────┐
//!   │ response │──▶│ headers  │      │  event   │
//!   │ classify │   │  merge   │      │  params  │
//!   │ + format │   └──────────┘      └──────────┘
//!   └────┬─────┘                          │
//!        ▼                                ▼
//!   ProxyResponse                     ParamMap
//!   {statusCode, headers, body}
//! ```
//!
//! Both paths are pure and stateless; nothing outlives a single call.

// Core subsystems
pub mod event;
pub mod headers;
pub mod response;

// Cross-cutting concerns
pub mod callback;
pub mod error;

pub use callback::proxy_callback;
pub use error::{ErrorLike, HttpError};
pub use event::{request_params, ParamMap, ProxyEvent};
pub use headers::{default_headers, merge_headers, HeaderMap};
pub use response::{format, format_serializable, Literal, ProxyResponse, ResponseValue};
