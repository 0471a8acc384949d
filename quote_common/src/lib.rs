//!
//! Common types and utilities shared by the quote server and client.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuoteError` used across the workspace.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `scope` — deadline and cancellation carrier threaded through bounded calls.
//! - `http` — timeout-bounded JSON GET used by both fetchers.
//! - `quote` — the quote value and the server's JSON response shape.
//! - `net` — networking constants and small helpers.
#![warn(missing_docs)]
pub mod error;
pub mod http;
pub mod net;
pub mod quote;
pub mod result;
pub mod scope;

pub use error::QuoteError;
pub use quote::{Quote, QuoteResponse};
pub use result::Result;
pub use scope::Scope;
