//! API Routes
//!
//! Configures the Axum router for the cache server.

use axum::{extract::DefaultBodyLimit, routing::any, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{cache_handler, AppState};

/// Creates the router serving `/cache`.
///
/// The route accepts every method so the handler decides between GET, POST
/// and 405 itself; axum's own method routing would also answer HEAD.
/// Bodies are unbounded so oversized writes reach the value-size check.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/cache", any(cache_handler))
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
