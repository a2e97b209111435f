//! fineract-client
//!
//! A typed async client for the Apache Fineract core-banking API.
//!
//! The crate is layered the way the platform's mobile/desktop consumers use
//! it:
//! - [`client`]: connection builder and per-resource service accessors
//! - [`services`]: declarative endpoint mappings (method + path + records)
//! - [`repository`]: trait seams between use-cases and the network
//! - [`use_cases`]: `invoke() -> ResourceStreamHandle` wrappers whose
//!   consumers see `Loading`, then one terminal `Success`/`Error`
//! - [`streaming`]: the bridge that produces that discipline from push-style
//!   sources, with exactly-once subscription release on every exit path
#![deny(unsafe_code)]

pub mod client;
pub mod config;
pub mod defaults;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod models;
pub mod prelude;
pub mod repository;
pub mod resource;
pub mod retry;
pub mod services;
pub mod streaming;
pub mod use_cases;
pub mod utils;

pub use client::FineractClient;
pub use error::FineractError;
pub use resource::Resource;
