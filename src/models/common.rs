//! Shared wire types.

use serde::{Deserialize, Serialize};

/// One page of a paged listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default)]
    pub total_filtered_records: Option<i64>,
    #[serde(default)]
    pub page_items: Vec<T>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            total_filtered_records: None,
            page_items: Vec::new(),
        }
    }
}

/// Catch-all command response.
///
/// Most mutating endpoints answer with a small JSON object (`resourceId`,
/// `clientId`, `changes`, ...) whose exact shape varies per command; it is
/// kept as-is rather than modeled field by field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenericResponse {
    #[serde(flatten)]
    pub response_fields: serde_json::Map<String, serde_json::Value>,
}

impl GenericResponse {
    /// The `resourceId` most command responses carry.
    pub fn resource_id(&self) -> Option<i64> {
        self.response_fields.get("resourceId").and_then(|v| v.as_i64())
    }
}

/// A platform date as it appears on the wire: `[year, month, day]`.
pub type PlatformDate = Vec<i32>;
