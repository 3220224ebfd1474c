// Notice Reply - drafts structured replies to GST notices

pub mod cli;
pub mod config;
pub mod extract;
pub mod middleware;
pub mod models;
pub mod reply;
pub mod routes;
pub mod types;
pub mod utils;

// Re-exports for convenience
pub use config::Config;
pub use extract::{extract, extract_optional, DocumentKind};
pub use models::{AppState, ReplyInputs, UploadedDocument};
pub use reply::{compose, ReplyComposer};
pub use types::{AppError, AppResult};

pub fn create_router(state: AppState) -> axum::Router {
    routes::create_router(state)
}
