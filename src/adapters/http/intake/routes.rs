//! HTTP routes for the legal intake endpoint.

use axum::{routing::post, Router};

use super::handlers::{submit_intake, IntakeHandlers};

/// Creates the intake router.
pub fn intake_routes(handlers: IntakeHandlers) -> Router {
    Router::new()
        .route("/", post(submit_intake))
        .with_state(handlers)
}
