//! Shared utilities.

pub mod cancel;
pub mod dates;
