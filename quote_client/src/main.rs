//! Quote Client — fetches the current USD-BRL quote from the quote server and
//! writes it to a text file.
//!
//! Usage example (CLI):
//! ```bash
//! quote_client --server-url http://localhost:8080/cotacao --output ./cotacao.txt
//! ```
//!
//! Any failure is fatal: the diagnostic is logged and the process exits with a
//! non-zero status without touching the output file.
use clap::Parser;
use log::{error, info, warn};
use quote_client::ClientError;
use quote_client::args::Args;
use quote_common::Scope;

#[tokio::main]
async fn main() -> Result<(), ClientError> {
    init_logger();
    let args = Args::parse();
    let root = Scope::root();
    {
        let token = root.token();
        if let Err(e) = ctrlc::set_handler(move || {
            info!("Ctrl+C received. Cancelling quote request...");
            token.cancel();
        }) {
            warn!("Failed to install Ctrl+C handler: {}", e);
        }
    }

    if let Err(e) = quote_client::run(&args, &root).await {
        error!("{}", e);
        return Err(e);
    }
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
