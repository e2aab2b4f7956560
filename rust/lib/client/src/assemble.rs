//! Shared building blocks for the per-entity assemblers.
//!
//! Single-resource mapping is strict: a `null` resource is an error.
//! List mapping is lenient: an absent or malformed body yields an empty
//! list, because the mock backends in use are inconsistent about it.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::client::ApiResponse;
use crate::error::AssembleError;

/// Version of the wire schema the assemblers target. Every resource uses
/// camelCase field names under `/api/v1`.
pub const RESOURCE_SCHEMA_VERSION: &str = "v1";

/// Decode one resource. `null` raises.
pub fn single<R: DeserializeOwned>(value: &Value) -> Result<R, AssembleError> {
    if value.is_null() {
        return Err(AssembleError::MissingResource);
    }
    R::deserialize(value).map_err(|e| AssembleError::Malformed(e.to_string()))
}

/// Decode a list response.
///
/// Accepts a bare array body or a `{"data": [...]}` envelope. Anything
/// else degrades to an empty list; elements that fail to decode are
/// skipped.
pub fn list<R: DeserializeOwned>(response: &ApiResponse) -> Vec<R> {
    items(&response.data)
        .iter()
        .filter_map(|item| match single::<R>(item) {
            Ok(r) => Some(r),
            Err(e) => {
                warn!(error = %e, "skipping list element");
                None
            }
        })
        .collect()
}

/// The array inside a list body, or an empty slice.
pub fn items(data: &Value) -> &[Value] {
    match data {
        Value::Array(items) => items,
        Value::Object(map) => match map.get("data") {
            Some(Value::Array(items)) => items,
            _ => {
                warn!("list response without a data array");
                &[]
            }
        },
        _ => &[],
    }
}
