//! GetTranscriptHandler - Read-side snapshot of a session.

use std::sync::Arc;

use crate::application::registry::SessionRegistry;
use crate::domain::flow::{FlowKind, FlowStatus, FlowStep, Message, PreferenceSet};
use crate::domain::foundation::{DomainError, SessionId};

/// Snapshot of a session for rendering.
#[derive(Debug, Clone)]
pub struct TranscriptView {
    pub session_id: SessionId,
    pub kind: FlowKind,
    pub step: FlowStep,
    pub status: FlowStatus,
    pub preferences: PreferenceSet,
    pub transcript: Vec<Message>,
}

/// Handler for transcript reads.
pub struct GetTranscriptHandler {
    registry: Arc<SessionRegistry>,
}

impl GetTranscriptHandler {
    pub fn new(registry: Arc<SessionRegistry>) -> Self {
        Self { registry }
    }

    pub async fn handle(&self, session_id: SessionId) -> Result<TranscriptView, DomainError> {
        self.registry
            .read(&session_id, |session| TranscriptView {
                session_id,
                kind: session.kind(),
                step: session.step(),
                status: session.status(),
                preferences: session.preferences().clone(),
                transcript: session.transcript().to_vec(),
            })
            .await
    }
}
