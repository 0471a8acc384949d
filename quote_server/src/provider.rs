//! External quote provider client.
//!
//! The provider answers `GET /json/last/USD-BRL` with
//! `{"USDBRL": {"bid": "<decimal-string>", ...}}`; every field but `bid` is ignored.
use std::time::Duration;

use quote_common::http::get_json;
use quote_common::{Quote, Result, Scope};
use reqwest::Client;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ProviderResponse {
    #[serde(rename = "USDBRL")]
    usdbrl: ProviderQuote,
}

#[derive(Debug, Deserialize)]
struct ProviderQuote {
    bid: String,
}

/// Fetches the live USD-BRL bid, bounded by a fixed budget per call.
#[derive(Debug, Clone)]
pub struct ProviderClient {
    http: Client,
    url: String,
    budget: Duration,
}

impl ProviderClient {
    pub fn new(url: &str, budget: Duration) -> Self {
        Self {
            http: Client::new(),
            url: url.to_string(),
            budget,
        }
    }

    /// One outbound GET under a child of `scope`; no retries.
    pub async fn fetch(&self, scope: &Scope) -> Result<Quote> {
        let response: ProviderResponse = get_json(&self.http, scope, &self.url, self.budget).await?;
        Ok(Quote::new(response.usdbrl.bid))
    }
}
