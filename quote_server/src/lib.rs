//! Quote HTTP server.
//!
//! Serves `GET /cotacao`. Every request fetches the live USD-BRL bid from the
//! external provider (bounded by the fetch budget), appends it to the SQLite
//! store (bounded by the persist budget), and answers `{"bid": "<value>"}`.
//!
//! Building blocks:
//! - `ProviderClient` — the outbound call to the quote provider.
//! - `SqliteStore` — the pooled database handle, opened once and shared.
//! - `handler::get_quote` — the three-stage pipeline per request.
//!
//! Shutdown: cancelling the root scope stops accepting connections and
//! cancels the scopes of requests still in flight.
pub mod args;
pub mod handler;
pub mod provider;
pub mod storage;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use log::info;
use quote_common::net::QUOTE_PATH;
use quote_common::{Result, Scope};
use tokio::net::TcpListener;

use crate::args::Args;
use crate::handler::{AppState, get_quote};
use crate::provider::ProviderClient;
use crate::storage::SqliteStore;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(QUOTE_PATH, get(get_quote))
        .with_state(state)
}

/// Serve on `listener` until `state.shutdown` is cancelled.
pub async fn serve(listener: TcpListener, state: Arc<AppState>) -> Result<()> {
    let shutdown = state.shutdown.clone();
    info!("Quote server listening on {}", listener.local_addr()?);
    axum::serve(listener, router(state))
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;
    Ok(())
}

/// Open the store, bind, and serve until `root` is cancelled.
pub async fn run(args: &Args, root: &Scope) -> Result<()> {
    let store = SqliteStore::open(&args.db_path, args.persist_timeout()).await?;
    let provider = ProviderClient::new(&args.provider_url, args.fetch_timeout());
    let state = Arc::new(AppState {
        provider,
        store: store.clone(),
        shutdown: root.token(),
    });

    let listener = TcpListener::bind(&args.bind).await?;
    let served = serve(listener, state).await;

    store.close().await;
    info!("Quote server stopped");
    served
}
