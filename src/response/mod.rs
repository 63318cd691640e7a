//! Response formatting subsystem.
//!
//! # Data Flow
//! ```text
//! caller value (error / object / literal / absent / callable)
//!     → value.rs (classify into ResponseValue at construction)
//!     → format.rs (per-variant formatter: status, headers, body)
//!     → ProxyResponse { statusCode, headers, body }
//!     → serialized as the gateway proxy response envelope
//! ```
//!
//! # Design Decisions
//! - Classification is a closed sum type, matched exhaustively; adding a
//!   variant forces every formatter site to handle it
//! - Formatting is total: every variant has a defined response, including
//!   the callable programming error (fixed 502)
//! - Serialization failure degrades the body, never the call

pub mod format;
pub mod value;

pub use format::{format, format_serializable, ProxyResponse};
pub use value::{Literal, ResponseValue};
