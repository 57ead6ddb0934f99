//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::kernel::ServerDeps;
use crate::server::routes::{health_handler, updates_handler};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub deps: Arc<ServerDeps>,
}

/// Build the Axum application router
///
/// The gateway webhook posts one TL update per request to `/updates`.
pub fn build_app(deps: ServerDeps) -> Router {
    let state = AppState {
        deps: Arc::new(deps),
    };

    Router::new()
        .route("/health", get(health_handler))
        .route("/updates", post(updates_handler))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
}
