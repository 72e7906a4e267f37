//! HTTP handlers for flow endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::error_response;
use crate::application::handlers::{
    GetTranscriptHandler, SendInputCommand, SendInputHandler, StartFlowCommand, StartFlowHandler,
    SubmitLeadCommand, SubmitLeadHandler,
};
use crate::domain::foundation::SessionId;
use crate::domain::lead::LeadDetails;

use super::dto::{
    SendInputRequest, SendInputResponse, StartFlowRequest, StartFlowResponse, SubmitLeadRequest,
    SubmitLeadResponse, TranscriptResponse,
};

/// Shared state for the flow router.
#[derive(Clone)]
pub struct FlowHandlers {
    start_handler: Arc<StartFlowHandler>,
    input_handler: Arc<SendInputHandler>,
    lead_handler: Arc<SubmitLeadHandler>,
    transcript_handler: Arc<GetTranscriptHandler>,
}

impl FlowHandlers {
    pub fn new(
        start_handler: Arc<StartFlowHandler>,
        input_handler: Arc<SendInputHandler>,
        lead_handler: Arc<SubmitLeadHandler>,
        transcript_handler: Arc<GetTranscriptHandler>,
    ) -> Self {
        Self {
            start_handler,
            input_handler,
            lead_handler,
            transcript_handler,
        }
    }
}

/// POST /api/flows - Open a flow for a page context
pub async fn start_flow(
    State(handlers): State<FlowHandlers>,
    Json(req): Json<StartFlowRequest>,
) -> Response {
    let cmd = StartFlowCommand {
        context: req.into(),
    };
    match handlers.start_handler.handle(cmd).await {
        Ok(result) => (StatusCode::CREATED, Json(StartFlowResponse::from(result))).into_response(),
        Err(err) => error_response(err),
    }
}

/// POST /api/flows/:id/input - Send one user input
pub async fn send_input(
    State(handlers): State<FlowHandlers>,
    Path(id): Path<SessionId>,
    Json(req): Json<SendInputRequest>,
) -> Response {
    let cmd = SendInputCommand {
        session_id: id,
        input: req.input,
    };
    match handlers.input_handler.handle(cmd).await {
        Ok(result) => Json(SendInputResponse::from(result)).into_response(),
        Err(err) => error_response(err),
    }
}

/// POST /api/flows/:id/lead - Submit the inline lead form
pub async fn submit_lead(
    State(handlers): State<FlowHandlers>,
    Path(id): Path<SessionId>,
    Json(req): Json<SubmitLeadRequest>,
) -> Response {
    let cmd = SubmitLeadCommand {
        session_id: id,
        details: LeadDetails::new(req.name, req.email, req.phone, req.extra),
    };
    match handlers.lead_handler.handle(cmd).await {
        Ok(result) => Json(SubmitLeadResponse::from(result)).into_response(),
        Err(err) => error_response(err),
    }
}

/// GET /api/flows/:id - Fetch the session snapshot
pub async fn get_transcript(
    State(handlers): State<FlowHandlers>,
    Path(id): Path<SessionId>,
) -> Response {
    match handlers.transcript_handler.handle(id).await {
        Ok(view) => Json(TranscriptResponse::from(view)).into_response(),
        Err(err) => error_response(err),
    }
}
