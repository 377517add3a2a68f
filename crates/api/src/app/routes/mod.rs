use std::path::Path;
use std::sync::Arc;

use axum::{routing::post, Extension, Router};
use tower_http::services::ServeDir;

use cargotrack_handling::HandlingService;

pub mod handling;

pub const INCIDENTS_PATH: &str = "/handling/v1/incidents";
pub const DOCS_PATH: &str = "/handling/v1/docs";

/// Router for the handling API.
///
/// Static documentation under [`DOCS_PATH`] is served straight from `docs_dir`
/// with the prefix stripped.
pub fn router(service: Arc<dyn HandlingService>, docs_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route(INCIDENTS_PATH, post(handling::register_incident))
        .nest_service(DOCS_PATH, ServeDir::new(docs_dir))
        .layer(Extension(service))
}
