//! Fetching the current quote from the quote server.
use std::time::Duration;

use quote_common::http::get_json;
use quote_common::{Quote, QuoteResponse, Result, Scope};
use reqwest::Client;

/// Calls `GET /cotacao` on the quote server, bounded by one budget.
#[derive(Debug, Clone)]
pub struct QuoteFetcher {
    http: Client,
    url: String,
    budget: Duration,
}

impl QuoteFetcher {
    pub fn new(url: &str, budget: Duration) -> Self {
        Self {
            http: Client::new(),
            url: url.to_string(),
            budget,
        }
    }

    /// One GET under a child of `scope`; no retries.
    pub async fn fetch(&self, scope: &Scope) -> Result<Quote> {
        let response: QuoteResponse = get_json(&self.http, scope, &self.url, self.budget).await?;
        Ok(response.bid)
    }
}
