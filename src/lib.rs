//! Contact List
//!
//! A REST backend over a single contacts collection, plus the typed client and
//! local state container used by the contact list frontend.

pub mod api;
pub mod client;
pub mod config;
pub mod db;
pub mod errors;
pub mod models;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use config::Config;
use db::Repository;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub config: Arc<Config>,
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route(
            "/contacts",
            get(api::list_contacts).post(api::create_contact),
        )
        .route(
            "/contacts/{id}",
            get(api::get_contact)
                .put(api::update_contact)
                .delete(api::delete_contact),
        );

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    let mut router = Router::new().nest("/api", api_routes).merge(health_routes);

    // Serve the built client when it is present
    if let Some(dir) = state.config.static_dir.as_ref().filter(|d| d.is_dir()) {
        tracing::info!("Serving static files from {:?}", dir);
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
