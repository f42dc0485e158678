//! HTTP API module
//!
//! Axum handlers and router for the standings endpoints.

pub mod table;

pub use table::{router, AppState, ErrorResponse, HealthResponse, RowsResponse};
