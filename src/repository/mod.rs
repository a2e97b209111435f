//! Repository interfaces.
//!
//! The seam between use-cases and the network layer: one `async_trait` per
//! aggregate, with a service-backed implementation. Dependencies are
//! constructor-injected `Arc`s; there is no global registry.

mod client_details;
mod document_list;
mod loan_account_approval;
mod survey;

pub use client_details::{ClientDetailsRepository, ClientDetailsRepositoryImpl};
pub use document_list::{DocumentListRepository, DocumentListRepositoryImpl};
pub use loan_account_approval::{LoanAccountApprovalRepository, LoanAccountApprovalRepositoryImpl};
pub use survey::{SurveyRepository, SurveyRepositoryImpl};
