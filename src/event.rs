//! Incoming gateway event and parameter merging.
//!
//! # Responsibilities
//! - Deserialize the request event's two parameter mappings
//! - Merge them into a single parameter map
//!
//! # Design Decisions
//! - Missing mappings default to empty; merging never fails
//! - Path parameters win over query parameters on key collision
//! - Unknown event fields are ignored so richer gateway events deserialize

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Parameter map extracted from a request event.
pub type ParamMap = BTreeMap<String, String>;

/// The slice of a gateway request event the parameter merger consumes.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProxyEvent {
    /// Query string parameters, absent when the request had none.
    pub query_string_parameters: Option<ParamMap>,

    /// Path parameters, absent when the route declares none.
    pub path_parameters: Option<ParamMap>,
}

/// Merge the event's query and path parameters; path wins per key.
pub fn request_params(event: &ProxyEvent) -> ParamMap {
    let mut params = event.query_string_parameters.clone().unwrap_or_default();
    params.extend(event.path_parameters.clone().unwrap_or_default());
    params
}
