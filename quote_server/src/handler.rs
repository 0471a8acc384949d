//! `GET /cotacao`: fetch, persist, respond.
//!
//! Each request runs three stages in order under its own scope, derived from
//! the server's shutdown signal. A failing stage ends the request with
//! `500 Internal Server Error` and a plain-text message naming the stage.
use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::{debug, error};
use quote_common::{QuoteError, QuoteResponse, Scope};
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::provider::ProviderClient;
use crate::storage::SqliteStore;

/// Everything a request needs; built once at startup and shared.
#[derive(Debug)]
pub struct AppState {
    pub provider: ProviderClient,
    pub store: SqliteStore,
    pub shutdown: CancellationToken,
}

/// A failed stage of the request pipeline.
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("failed to fetch quote: {0}")]
    Fetch(#[source] QuoteError),

    #[error("failed to save quote: {0}")]
    Persist(#[source] QuoteError),
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        error!("{}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

pub async fn get_quote(State(state): State<Arc<AppState>>) -> Result<Json<QuoteResponse>, HandlerError> {
    let scope = Scope::from_token(state.shutdown.child_token());

    let quote = state.provider.fetch(&scope).await.map_err(HandlerError::Fetch)?;
    let id = state
        .store
        .insert(&scope, &quote)
        .await
        .map_err(HandlerError::Persist)?;
    debug!("Stored quote {} as record {}", quote, id);

    Ok(Json(QuoteResponse::from(quote)))
}
