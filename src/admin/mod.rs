//! Inspection endpoints.
//!
//! Mounted at the server root under `/_router`, independent of
//! `history.base`: with base `/console` they answer at `/_router/routes`,
//! while `/console/_router/...` belongs to the navigation handler.

pub mod handlers;

use axum::{routing::get, Router};

use crate::http::server::AppState;
use self::handlers::*;

/// Prefix reserved for inspection endpoints.
pub const ADMIN_PREFIX: &str = "/_router";

pub fn setup_admin_router() -> Router<AppState> {
    Router::new()
        .route("/_router/status", get(get_status))
        .route("/_router/routes", get(get_routes))
        .route("/_router/resolve", get(get_resolve))
}
