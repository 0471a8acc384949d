//! Quote value and the JSON shape the server answers with.
//!
//! A `Quote` is the USD-BRL bid exactly as the upstream provider formatted it.
//! It is never parsed as a number.
use std::fmt;

use serde::{Deserialize, Serialize};

/// Exchange rate bid, kept as an opaque decimal string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quote(String);

impl Quote {
    /// Wrap a bid string.
    pub fn new(bid: impl Into<String>) -> Self {
        Quote(bid.into())
    }

    /// Borrow the bid string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Body of a successful `GET /cotacao`: `{"bid": "<decimal-string>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteResponse {
    /// The quote that was fetched and stored.
    pub bid: Quote,
}

impl From<Quote> for QuoteResponse {
    fn from(bid: Quote) -> Self {
        QuoteResponse { bid }
    }
}
