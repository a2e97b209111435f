//! Loan account endpoints.

use crate::endpoints;
use crate::error::FineractError;
use crate::http::HttpExecutor;
use crate::models::{GenericResponse, LoanApproval};

#[derive(Clone)]
pub struct LoansService {
    http: HttpExecutor,
}

impl LoansService {
    pub(crate) fn new(http: HttpExecutor) -> Self {
        Self { http }
    }

    /// Approve a submitted loan application.
    pub async fn approve_loan(
        &self,
        loan_id: i64,
        approval: &LoanApproval,
    ) -> Result<GenericResponse, FineractError> {
        self.http
            .post_command(&endpoints::loan(loan_id), "approve", approval)
            .await
    }
}
