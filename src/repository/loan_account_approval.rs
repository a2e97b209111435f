//! Loan account approval repository.

use async_trait::async_trait;

use crate::client::FineractClient;
use crate::error::FineractError;
use crate::models::{GenericResponse, LoanApproval};

#[async_trait]
pub trait LoanAccountApprovalRepository: Send + Sync {
    async fn approve_loan(
        &self,
        loan_id: i64,
        approval: LoanApproval,
    ) -> Result<GenericResponse, FineractError>;
}

pub struct LoanAccountApprovalRepositoryImpl {
    client: FineractClient,
}

impl LoanAccountApprovalRepositoryImpl {
    pub fn new(client: FineractClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LoanAccountApprovalRepository for LoanAccountApprovalRepositoryImpl {
    async fn approve_loan(
        &self,
        loan_id: i64,
        approval: LoanApproval,
    ) -> Result<GenericResponse, FineractError> {
        self.client.loans().approve_loan(loan_id, &approval).await
    }
}
