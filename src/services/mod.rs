//! Typed endpoint mappings.
//!
//! One service per platform resource, each a declarative wrapper over the
//! HTTP helpers: method + path + parameters in, serde record out. No logic
//! beyond parameter shaping lives here.

mod clients;
mod documents;
mod loans;
mod surveys;

pub use clients::ClientsService;
pub use documents::DocumentsService;
pub use loans::LoansService;
pub use surveys::SurveysService;
