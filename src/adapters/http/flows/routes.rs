//! HTTP routes for flow endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_transcript, send_input, start_flow, submit_lead, FlowHandlers};

/// Creates the flow router with all endpoints.
pub fn flow_routes(handlers: FlowHandlers) -> Router {
    Router::new()
        .route("/", post(start_flow))
        .route("/:id", get(get_transcript))
        .route("/:id/input", post(send_input))
        .route("/:id/lead", post(submit_lead))
        .with_state(handlers)
}
