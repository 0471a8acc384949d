//! Command-line arguments for the Quote Server.
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

/// Upstream endpoint serving the latest USD-BRL quote.
pub const DEFAULT_PROVIDER_URL: &str = "https://economia.awesomeapi.com.br/json/last/USD-BRL";

/// Parsed command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Address to listen on.
    #[clap(long, default_value = "0.0.0.0:8080")]
    pub bind: String,

    /// SQLite database file; created on first start.
    #[clap(long, default_value = "./cotacoes.db")]
    pub db_path: PathBuf,

    /// External quote provider URL.
    #[clap(long, default_value = DEFAULT_PROVIDER_URL)]
    pub provider_url: String,

    /// Budget for the upstream fetch, in milliseconds.
    #[clap(long, default_value_t = 200)]
    pub fetch_timeout_ms: u64,

    /// Budget for one database insert, in milliseconds.
    #[clap(long, default_value_t = 10)]
    pub persist_timeout_ms: u64,
}

impl Args {
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }

    pub fn persist_timeout(&self) -> Duration {
        Duration::from_millis(self.persist_timeout_ms)
    }
}
