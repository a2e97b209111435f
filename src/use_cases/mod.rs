//! Use-case wrappers.
//!
//! Each use-case holds its repository behind an `Arc` and exposes
//! `invoke(params) -> ResourceStreamHandle<T>`: the consumer sees `Loading`
//! first, then one terminal `Success`/`Error`, and can detach at any time.
//! Failures are reported with a fixed, user-facing message; the normalized
//! error travels along as the resource's cause.

mod client;
mod document;
mod loan;
mod survey;

pub use client::*;
pub use document::*;
pub use loan::*;
pub use survey::*;
