//! Retry module
//! - policy.rs: generic policy-based retries

pub mod policy;

pub use policy::*;
