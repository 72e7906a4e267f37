//! HTTP adapters - REST API implementations.
//!
//! The flow endpoints and the legal intake endpoint each get their own
//! `dto`/`handlers`/`routes` files; this module assembles them into one
//! app router with tracing and CORS applied.

pub mod error;
pub mod flows;
pub mod intake;

use axum::{http::StatusCode, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use flows::{flow_routes, FlowHandlers};
pub use intake::{intake_routes, IntakeHandlers};

/// Builds the full application router.
pub fn app_router(flow_handlers: FlowHandlers, intake_handlers: IntakeHandlers) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/flows", flow_routes(flow_handlers))
        .nest("/api/legal-intake", intake_routes(intake_handlers))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// GET /health - Liveness probe
async fn health() -> StatusCode {
    StatusCode::OK
}
