//! Loan use-cases.

use std::sync::Arc;

use crate::models::{GenericResponse, LoanApproval};
use crate::repository::LoanAccountApprovalRepository;
use crate::streaming::{ResourceStreamHandle, bridge_future};

pub struct ApproveLoanUseCase {
    repository: Arc<dyn LoanAccountApprovalRepository>,
}

impl ApproveLoanUseCase {
    pub fn new(repository: Arc<dyn LoanAccountApprovalRepository>) -> Self {
        Self { repository }
    }

    pub fn invoke(
        &self,
        loan_id: i64,
        approval: LoanApproval,
    ) -> ResourceStreamHandle<GenericResponse> {
        let repository = self.repository.clone();
        bridge_future(
            async move { repository.approve_loan(loan_id, approval).await },
            "Failed to approve loan",
        )
    }
}
