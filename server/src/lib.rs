//! Pods Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and implementations
//! - handlers: HTTP request handlers

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub mod domain;
pub mod handlers;
pub mod repository;

use repository::{MemoryPodRepository, PodRepository};

/// Directory the built frontend is served from
pub const FRONTEND_DIST: &str = "dist";

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn PodRepository>,
}

impl AppState {
    /// Fresh state with an empty in-memory collection
    pub fn new() -> Self {
        Self {
            repo: Arc::new(MemoryPodRepository::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the application router around the given state
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/pods",
            get(handlers::list_pods)
                .post(handlers::create_pod)
                .delete(handlers::delete_pod),
        )
        .fallback_service(ServeDir::new(FRONTEND_DIST))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
