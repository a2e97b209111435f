//! Loan account command payloads.

use serde::{Deserialize, Serialize};

use crate::defaults;

/// Body for `POST /loans/{id}?command=approve`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanApproval {
    pub approved_on_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_loan_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_disbursement_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub date_format: String,
    pub locale: String,
}

impl LoanApproval {
    pub fn new(approved_on_date: impl Into<String>) -> Self {
        Self {
            approved_on_date: approved_on_date.into(),
            approved_loan_amount: None,
            expected_disbursement_date: None,
            note: None,
            date_format: defaults::platform::DATE_FORMAT.to_string(),
            locale: defaults::platform::LOCALE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approval_carries_locale_and_format() {
        let approval = LoanApproval::new("18 March 2024");
        let json = serde_json::to_value(&approval).unwrap();
        assert_eq!(json["approvedOnDate"], "18 March 2024");
        assert_eq!(json["dateFormat"], "dd MMMM yyyy");
        assert_eq!(json["locale"], "en");
        assert!(json.get("note").is_none());
    }
}
