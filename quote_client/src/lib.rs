//! Quote Client: one fetch-and-save cycle.
//!
//! Calls the quote server's `GET /cotacao` under a 300ms budget, takes the
//! `bid` field, and overwrites the output file with `Dólar: <bid>`. The file
//! is written only after the fetch succeeded, so a failed run leaves any
//! previous file untouched.
pub mod args;
pub mod fetcher;
pub mod output;

use log::info;
use quote_common::{QuoteError, Scope};
use thiserror::Error;

use crate::args::Args;
use crate::fetcher::QuoteFetcher;

/// A failed step of the client run.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("failed to fetch quote: {0}")]
    Fetch(#[source] QuoteError),

    #[error("failed to save quote: {0}")]
    Save(#[source] QuoteError),
}

pub async fn run(args: &Args, scope: &Scope) -> Result<(), ClientError> {
    let fetcher = QuoteFetcher::new(&args.server_url, args.timeout());
    let quote = fetcher.fetch(scope).await.map_err(ClientError::Fetch)?;
    info!("Received quote {}", quote);

    output::write_quote(&args.output, &quote).map_err(ClientError::Save)?;
    info!("Quote saved to '{}'", args.output.display());
    Ok(())
}
