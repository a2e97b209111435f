//! Fineract API path constants and builders.
//!
//! Paths are relative to the configured base URL (which already carries the
//! `/api/v1` segment). Variable segments are percent-encoded.

pub const CLIENTS: &str = "clients";
pub const LOANS: &str = "loans";
pub const DOCUMENTS: &str = "documents";
pub const SURVEYS: &str = "surveys";
pub const IDENTIFIERS: &str = "identifiers";
pub const DATATABLES: &str = "datatables";

/// Datatable backing client pinpoint locations.
pub const CLIENT_PINPOINT_LOCATION: &str = "client_pinpoint_location";

fn seg(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

pub fn client(client_id: i64) -> String {
    format!("{CLIENTS}/{client_id}")
}

pub fn client_accounts(client_id: i64) -> String {
    format!("{CLIENTS}/{client_id}/accounts")
}

pub fn client_template() -> String {
    format!("{CLIENTS}/template")
}

pub fn client_images(client_id: i64) -> String {
    format!("{CLIENTS}/{client_id}/images")
}

pub fn client_identifiers(client_id: i64) -> String {
    format!("{CLIENTS}/{client_id}/{IDENTIFIERS}")
}

pub fn client_identifier(client_id: i64, identifier_id: i64) -> String {
    format!("{CLIENTS}/{client_id}/{IDENTIFIERS}/{identifier_id}")
}

pub fn client_identifier_template(client_id: i64) -> String {
    format!("{CLIENTS}/{client_id}/{IDENTIFIERS}/template")
}

pub fn pinpoint_locations(client_id: i64) -> String {
    format!("{DATATABLES}/{CLIENT_PINPOINT_LOCATION}/{client_id}")
}

pub fn pinpoint_location(apptable_id: i64, datatable_id: i64) -> String {
    format!("{DATATABLES}/{CLIENT_PINPOINT_LOCATION}/{apptable_id}/{datatable_id}")
}

pub fn loan(loan_id: i64) -> String {
    format!("{LOANS}/{loan_id}")
}

/// Documents are attached to an arbitrary entity type ("clients", "loans", ...).
pub fn documents(entity_type: &str, entity_id: i64) -> String {
    format!("{}/{entity_id}/{DOCUMENTS}", seg(entity_type))
}

pub fn document(entity_type: &str, entity_id: i64, document_id: i64) -> String {
    format!("{}/{entity_id}/{DOCUMENTS}/{document_id}", seg(entity_type))
}

pub fn document_attachment(entity_type: &str, entity_id: i64, document_id: i64) -> String {
    format!(
        "{}/{entity_id}/{DOCUMENTS}/{document_id}/attachment",
        seg(entity_type)
    )
}

pub fn survey(survey_id: i64) -> String {
    format!("{SURVEYS}/{survey_id}")
}

pub fn survey_scorecards(survey_id: i64) -> String {
    format!("{SURVEYS}/{survey_id}/scorecards")
}
