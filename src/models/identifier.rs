//! Client identifier records.

use serde::{Deserialize, Serialize};

/// A system code value (identifier document types and the like).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Code {
    pub id: Option<i64>,
    pub name: Option<String>,
    #[serde(default)]
    pub is_system_defined: Option<bool>,
}

/// An identity document attached to a client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identifier {
    pub id: Option<i64>,
    pub client_id: Option<i64>,
    pub document_type: Option<Code>,
    pub document_key: Option<String>,
    pub description: Option<String>,
}

/// Body for `POST /clients/{id}/identifiers`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentifierPayload {
    pub document_type_id: i64,
    pub document_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Template listing the allowed identifier document types.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentifierTemplate {
    #[serde(default)]
    pub allowed_document_types: Vec<Code>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentifierCreationResponse {
    pub client_id: Option<i64>,
    pub office_id: Option<i64>,
    pub resource_id: Option<i64>,
}
