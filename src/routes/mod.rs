//! API Routes
//!
//! This module organizes all HTTP endpoints for the application:
//! - `/` - Draft form
//! - `/api/draft` - Generate a draft from a multipart form (JSON or plain text)
//! - `/api/draft/download` - Download a draft as a text file
//! - `/api/compose` - Compose a draft from already-extracted texts (JSON)
//! - `/api/references` - Static law references
//! - `/api/health` - Health checks

pub mod draft;
pub mod health;
pub mod references;
pub mod ui;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::middleware::apply_cors;
use crate::models::AppState;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    info!("Creating application router");

    let allowed_origins = state.config.server.cors_allowed_origins.clone();

    let router = Router::new()
        .merge(draft::router(state))
        .merge(references::router())
        .merge(health::router())
        .merge(ui::router());

    apply_cors(router, &allowed_origins).layer(TraceLayer::new_for_http())
}
