//! Document records.

use serde::{Deserialize, Serialize};

/// A document attached to some entity (client, loan, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: Option<i64>,
    pub parent_entity_type: Option<String>,
    pub parent_entity_id: Option<i64>,
    pub name: Option<String>,
    pub file_name: Option<String>,
    pub size: Option<i64>,
    #[serde(rename = "type")]
    pub content_type: Option<String>,
    pub description: Option<String>,
}
