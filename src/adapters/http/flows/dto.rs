//! HTTP DTOs for flow endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::application::handlers::{SendInputResult, StartFlowResult, SubmitLeadResult, TranscriptView};
use crate::domain::catalog::PropertyRef;
use crate::domain::flow::{Author, Message, PreferenceSet, SideEffect};
use crate::domain::routing::{FlowContext, SearchTab, ServiceKind};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to open a flow for a page context.
#[derive(Debug, Clone, Deserialize)]
pub struct StartFlowRequest {
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub search_tab: Option<SearchTab>,
    #[serde(default)]
    pub service: Option<ServiceKind>,
    #[serde(default)]
    pub plan: bool,
    #[serde(default)]
    pub property: Option<PropertyRef>,
}

impl From<StartFlowRequest> for FlowContext {
    fn from(req: StartFlowRequest) -> Self {
        FlowContext {
            path: req.path,
            search_tab: req.search_tab,
            service: req.service,
            plan: req.plan,
            property: req.property,
        }
    }
}

/// Request carrying one user input.
#[derive(Debug, Clone, Deserialize)]
pub struct SendInputRequest {
    pub input: String,
}

/// Request carrying a lead form submission.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitLeadRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub extra: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One transcript message on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct MessageDto {
    pub id: String,
    pub author: Author,
    pub text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_card: Option<PropertyRef>,
    pub created_at: String,
}

impl From<&Message> for MessageDto {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id().to_string(),
            author: message.author(),
            text: message.text().to_string(),
            options: message.options().to_vec(),
            property_card: message.property_card().cloned(),
            created_at: message.created_at().as_datetime().to_rfc3339(),
        }
    }
}

/// Response for a started flow.
#[derive(Debug, Clone, Serialize)]
pub struct StartFlowResponse {
    pub session_id: String,
    pub kind: String,
    pub messages: Vec<MessageDto>,
}

impl From<StartFlowResult> for StartFlowResponse {
    fn from(result: StartFlowResult) -> Self {
        Self {
            session_id: result.session_id.to_string(),
            kind: result.kind.label().to_string(),
            messages: result.transcript.iter().map(MessageDto::from).collect(),
        }
    }
}

/// Response for one processed input.
#[derive(Debug, Clone, Serialize)]
pub struct SendInputResponse {
    pub messages: Vec<MessageDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side_effect: Option<SideEffect>,
    pub ended: bool,
    pub superseded: bool,
}

impl From<SendInputResult> for SendInputResponse {
    fn from(result: SendInputResult) -> Self {
        Self {
            messages: result.messages.iter().map(MessageDto::from).collect(),
            side_effect: result.side_effect,
            ended: result.ended,
            superseded: result.superseded,
        }
    }
}

/// Response for an accepted lead.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitLeadResponse {
    pub messages: Vec<MessageDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side_effect: Option<SideEffect>,
    pub ended: bool,
}

impl From<SubmitLeadResult> for SubmitLeadResponse {
    fn from(result: SubmitLeadResult) -> Self {
        Self {
            messages: result.messages.iter().map(MessageDto::from).collect(),
            side_effect: result.side_effect,
            ended: result.ended,
        }
    }
}

/// Full session snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptResponse {
    pub session_id: String,
    pub kind: String,
    pub step: String,
    pub status: String,
    pub preferences: PreferenceSet,
    pub messages: Vec<MessageDto>,
}

impl From<TranscriptView> for TranscriptResponse {
    fn from(view: TranscriptView) -> Self {
        Self {
            session_id: view.session_id.to_string(),
            kind: view.kind.label().to_string(),
            step: view.step.label().to_string(),
            status: format!("{:?}", view.status).to_lowercase(),
            preferences: view.preferences,
            messages: view.transcript.iter().map(MessageDto::from).collect(),
        }
    }
}
