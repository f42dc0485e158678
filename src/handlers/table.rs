//! HTTP handlers for the standings API
//!
//! Three endpoints:
//! - `GET /api/table` — the raw extracted rows, header labels normalized
//! - `GET /api/table/display` — the display-normalized table
//! - `GET /health` — liveness probe
//!
//! Every table request re-fetches and re-parses the source page; there is
//! no cache between requests. Load failures are logged and answered with a
//! generic error body, never propagated as a panic.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info, instrument};

use crate::config::ScrapeConfig;
use crate::display::Normalizer;
use crate::error::{Error, Result};
use crate::extraction::{RawTable, TableExtractor};
use crate::fetch::PageSource;

/// Shared state for the API handlers.
pub struct AppState {
    source: Box<dyn PageSource>,
    extractor: TableExtractor,
    normalizer: Normalizer,
}

impl AppState {
    /// Build state around a page source and scrape configuration.
    pub fn new(source: impl PageSource + 'static, config: ScrapeConfig) -> Self {
        Self {
            source: Box::new(source),
            extractor: TableExtractor::new(config),
            normalizer: Normalizer::new(),
        }
    }

    /// Fetch the source page and extract the table from it.
    async fn load_table(&self) -> Result<RawTable> {
        let html = self.source.fetch_page().await?;
        self.extractor.extract(&html)
    }
}

/// Response body for `/api/table`: the raw extracted rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowsResponse {
    /// Header row first (labels normalized), data rows after.
    pub rows: Vec<Vec<String>>,
}

/// Error body returned when the table cannot be loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Generic failure message; causes are logged, not exposed.
    pub error: String,
}

/// Health check response for liveness probes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Health status (always "healthy" if responding)
    pub status: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

/// `GET /api/table` — raw rows, as published.
#[instrument(skip_all)]
pub async fn table_handler(State(state): State<Arc<AppState>>) -> Response {
    match state.load_table().await {
        Ok(table) => {
            info!(rows = table.rows.len(), "serving raw table");
            Json(RowsResponse { rows: table.rows }).into_response()
        }
        Err(err) => load_failure(&err),
    }
}

/// `GET /api/table/display` — normalized headers, merged goals, cleaned
/// team names, per-row highlight zones.
#[instrument(skip_all)]
pub async fn display_handler(State(state): State<Arc<AppState>>) -> Response {
    match state.load_table().await {
        Ok(table) => {
            let display_table = state.normalizer.normalize(&table);
            info!(rows = display_table.rows.len(), "serving display table");
            Json(display_table).into_response()
        }
        Err(err) => load_failure(&err),
    }
}

/// `GET /health`
#[instrument(skip_all)]
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse::default())
}

fn load_failure(err: &Error) -> Response {
    error!(error = %err, "failed to load league table");
    (
        StatusCode::BAD_GATEWAY,
        Json(ErrorResponse {
            error: "failed to fetch league table".to_string(),
        }),
    )
        .into_response()
}

/// Build the API router.
///
/// The table is meant to be embedded from arbitrary club sites, so the
/// CORS layer allows any origin, method, and header.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/table", get(table_handler))
        .route("/api/table/display", get(display_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .with_state(state)
}
