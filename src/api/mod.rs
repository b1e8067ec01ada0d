//! HTTP API server

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

pub mod handlers;
pub mod state;

pub use state::AppState;

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/health", get(handlers::health))
        .route("/users", get(handlers::list_users))
        .route("/users/:id", get(handlers::get_user))
        .route("/calc/add", post(handlers::add))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handlers::internal_error))
        .with_state(state)
}
