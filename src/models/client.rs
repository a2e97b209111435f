//! Client records and command payloads.

use serde::{Deserialize, Serialize};

use super::PlatformDate;
use crate::defaults;

/// A status code/value pair as returned by the platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Status {
    pub id: Option<i64>,
    pub code: Option<String>,
    pub value: Option<String>,
}

/// A Fineract client (the person/business, not the HTTP client).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: Option<i64>,
    pub account_no: Option<String>,
    pub external_id: Option<String>,
    pub status: Option<Status>,
    #[serde(default)]
    pub active: bool,
    pub activation_date: Option<PlatformDate>,
    pub firstname: Option<String>,
    pub middlename: Option<String>,
    pub lastname: Option<String>,
    pub fullname: Option<String>,
    pub display_name: Option<String>,
    pub mobile_no: Option<String>,
    pub date_of_birth: Option<PlatformDate>,
    pub office_id: Option<i64>,
    pub office_name: Option<String>,
    pub staff_id: Option<i64>,
    pub staff_name: Option<String>,
    #[serde(default)]
    pub image_present: bool,
    pub image_id: Option<i64>,
}

/// Body for `POST /clients`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middlename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fullname: Option<String>,
    pub office_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff_id: Option<i64>,
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activation_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    pub date_format: String,
    pub locale: String,
}

impl ClientPayload {
    pub fn new(office_id: i64) -> Self {
        Self {
            office_id,
            date_format: defaults::platform::DATE_FORMAT.to_string(),
            locale: defaults::platform::LOCALE.to_string(),
            ..Self::default()
        }
    }
}

/// Body for `POST /clients/{id}?command=activate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivatePayload {
    pub activation_date: String,
    pub date_format: String,
    pub locale: String,
}

impl ActivatePayload {
    pub fn new(activation_date: impl Into<String>) -> Self {
        Self {
            activation_date: activation_date.into(),
            date_format: defaults::platform::DATE_FORMAT.to_string(),
            locale: defaults::platform::LOCALE.to_string(),
        }
    }
}

/// Summary of a loan account as listed under a client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanAccount {
    pub id: Option<i64>,
    pub account_no: Option<String>,
    pub external_id: Option<String>,
    pub product_id: Option<i64>,
    pub product_name: Option<String>,
    pub status: Option<Status>,
    pub loan_type: Option<Status>,
}

/// Summary of a savings account as listed under a client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsAccount {
    pub id: Option<i64>,
    pub account_no: Option<String>,
    pub product_id: Option<i64>,
    pub product_name: Option<String>,
    pub status: Option<Status>,
    pub account_balance: Option<f64>,
}

/// Response of `GET /clients/{id}/accounts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientAccounts {
    #[serde(default)]
    pub loan_accounts: Vec<LoanAccount>,
    #[serde(default)]
    pub savings_accounts: Vec<SavingsAccount>,
}

/// An office option offered by the client template.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficeOption {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub name_decorated: Option<String>,
}

/// A staff option offered by the client template.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffOption {
    pub id: Option<i64>,
    pub display_name: Option<String>,
}

/// Response of `GET /clients/template`: the options a client creation form
/// needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientsTemplate {
    pub activation_date: Option<PlatformDate>,
    pub office_id: Option<i64>,
    #[serde(default)]
    pub office_options: Vec<OfficeOption>,
    #[serde(default)]
    pub staff_options: Vec<StaffOption>,
}

/// Entry in the `client_pinpoint_location` datatable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientAddressRequest {
    pub place_id: String,
    pub place_address: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientAddressResponse {
    pub client_id: Option<i64>,
    pub id: Option<i64>,
    pub place_id: Option<String>,
    pub place_address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}
