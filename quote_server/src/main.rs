//! Quote server binary. See the library docs for the request pipeline.
use clap::Parser;
use log::{error, info, warn};
use quote_common::{QuoteError, Scope};
use quote_server::args::Args;

#[tokio::main]
async fn main() -> Result<(), QuoteError> {
    init_logger();
    let args = Args::parse();
    let root = Scope::root();
    {
        let token = root.token();
        if let Err(e) = ctrlc::set_handler(move || {
            info!("Ctrl+C received. Shutting down server...");
            token.cancel();
        }) {
            warn!("Failed to install Ctrl+C handler: {}", e);
        }
    }

    info!("Starting quote server on {}", args.bind);
    if let Err(e) = quote_server::run(&args, &root).await {
        error!("Quote server failed: {}", e);
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
