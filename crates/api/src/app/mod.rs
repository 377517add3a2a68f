//! HTTP API application wiring (Axum router + service wiring).
//!
//! One request flows one way through these modules:
//! - `decode.rs`: raw JSON body -> typed command (with `coercion.rs` for event types)
//! - `endpoint.rs`: command -> handling service -> response value
//! - `errors.rs`: outcome -> status code
//! - `encode.rs`: response value -> status line + JSON body
//! - `routes/`: path + method bindings

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use cargotrack_handling::{HandlingService, InMemoryHandlingService};

use crate::config::ApiConfig;

pub mod coercion;
pub mod decode;
pub mod encode;
pub mod endpoint;
pub mod errors;
pub mod routes;

/// Build the full HTTP router backed by the in-memory handling service (public entrypoint used by `main.rs`).
pub fn build_app(config: &ApiConfig) -> Router {
    let service = if config.seed_sample_data {
        InMemoryHandlingService::with_sample_data()
    } else {
        InMemoryHandlingService::new()
    };

    build_app_with_service(Arc::new(service), &config.docs_dir)
}

/// Build the router around any handling service.
pub fn build_app_with_service(service: Arc<dyn HandlingService>, docs_dir: impl AsRef<Path>) -> Router {
    routes::router(service, docs_dir).layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
