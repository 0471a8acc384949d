//! Command-line arguments for the Quote Client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

/// Parsed command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Quote endpoint of the running quote server.
    #[clap(long, default_value = "http://localhost:8080/cotacao")]
    pub server_url: String,

    /// File the quote is written to; overwritten on every run.
    #[clap(long, default_value = "cotacao.txt")]
    pub output: PathBuf,

    /// Budget for the whole server round-trip, in milliseconds.
    #[clap(long, default_value_t = 300)]
    pub timeout_ms: u64,
}

impl Args {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
