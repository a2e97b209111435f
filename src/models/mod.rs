//! Data records mirroring Fineract API payloads.
//!
//! Plain serde types with camelCase wire names; no identity or lifecycle
//! logic. Platform dates arrive as `[year, month, day]` arrays and are kept
//! that way; command bodies send formatted date strings with an explicit
//! `dateFormat`/`locale` pair, as the platform requires.

mod client;
mod common;
mod document;
mod identifier;
mod loan;
mod survey;

pub use client::*;
pub use common::*;
pub use document::*;
pub use identifier::*;
pub use loan::*;
pub use survey::*;
