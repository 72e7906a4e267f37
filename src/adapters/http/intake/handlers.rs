//! HTTP handlers for the legal intake endpoint.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::error_response;
use crate::application::handlers::SubmitIntakeHandler;

use super::dto::{SubmitIntakeRequest, SubmitIntakeResponse};

/// Shared state for the intake router.
#[derive(Clone)]
pub struct IntakeHandlers {
    submit_handler: Arc<SubmitIntakeHandler>,
}

impl IntakeHandlers {
    pub fn new(submit_handler: Arc<SubmitIntakeHandler>) -> Self {
        Self { submit_handler }
    }
}

/// POST /api/legal-intake - Submit a completed legal intake
pub async fn submit_intake(
    State(handlers): State<IntakeHandlers>,
    Json(req): Json<SubmitIntakeRequest>,
) -> Response {
    match handlers.submit_handler.handle(req.into()).await {
        Ok(result) => {
            (StatusCode::CREATED, Json(SubmitIntakeResponse::from(result))).into_response()
        }
        Err(err) => error_response(err),
    }
}
