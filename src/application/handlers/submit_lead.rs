//! SubmitLeadHandler - Runs the lead gate and delivers the lead.

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::registry::SessionRegistry;
use crate::domain::flow::{Message, SideEffect};
use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::domain::lead::LeadDetails;
use crate::ports::{LeadRecord, LeadSink};

/// Command carrying one lead form submission.
#[derive(Debug, Clone)]
pub struct SubmitLeadCommand {
    pub session_id: SessionId,
    pub details: LeadDetails,
}

/// Result of an accepted lead: the confirmation messages and whatever
/// the flow did next.
#[derive(Debug, Clone)]
pub struct SubmitLeadResult {
    pub messages: Vec<Message>,
    pub side_effect: Option<SideEffect>,
    pub ended: bool,
}

/// Handler for lead form submissions.
pub struct SubmitLeadHandler {
    registry: Arc<SessionRegistry>,
    sink: Arc<dyn LeadSink>,
}

impl SubmitLeadHandler {
    pub fn new(registry: Arc<SessionRegistry>, sink: Arc<dyn LeadSink>) -> Self {
        Self { registry, sink }
    }

    pub async fn handle(&self, cmd: SubmitLeadCommand) -> Result<SubmitLeadResult, DomainError> {
        // Deliver before the session advances past its gate, so a sink
        // failure leaves the form open for a retry.
        let kind = self
            .registry
            .read(&cmd.session_id, |session| {
                session.check_lead_gate(&cmd.details).map(|_| session.kind())
            })
            .await??;

        let record = LeadRecord::from_flow(cmd.session_id, kind, cmd.details.clone());
        self.sink.deliver(record).await.map_err(|err| {
            warn!(session_id = %cmd.session_id, error = %err, "lead delivery failed");
            DomainError::new(ErrorCode::LeadDeliveryFailed, "could not deliver the lead")
        })?;

        let turn = self
            .registry
            .modify(&cmd.session_id, |session| {
                session.submit_lead(cmd.details.clone())
            })
            .await?;

        // Lead confirmations land immediately; no typing delay here.
        let messages = turn.reply.messages().to_vec();
        self.registry
            .modify(&cmd.session_id, |session| Ok(session.deliver(turn.reply)))
            .await?;

        info!(session_id = %cmd.session_id, kind = kind.label(), "lead captured");

        Ok(SubmitLeadResult {
            messages,
            side_effect: turn.side_effect,
            ended: turn.ended,
        })
    }
}
