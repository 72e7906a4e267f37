//! LeadSink port - Interface for delivering captured leads.
//!
//! This port defines how the application hands off a captured lead
//! without knowing where it goes (in-memory, CRM webhook, queue).

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::flow::FlowKind;
use crate::domain::foundation::{DomainError, LeadId, SessionId, Timestamp};
use crate::domain::lead::{IntakePayload, LeadDetails};

/// Where a lead came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadSource {
    /// Captured inline by a chat flow's lead gate.
    ChatFlow(FlowKind),

    /// Submitted through the legal services intake wizard.
    LegalIntake,
}

/// A captured lead, ready for delivery.
#[derive(Debug, Clone, Serialize)]
pub struct LeadRecord {
    pub id: LeadId,

    /// Session the lead was captured in, when it came from a chat flow.
    pub session_id: Option<SessionId>,

    pub source: LeadSource,

    pub details: LeadDetails,

    /// Full intake payload for legal intake leads.
    pub intake: Option<IntakePayload>,

    pub received_at: Timestamp,
}

impl LeadRecord {
    /// A record for a lead captured by a chat flow.
    pub fn from_flow(session_id: SessionId, kind: FlowKind, details: LeadDetails) -> Self {
        Self {
            id: LeadId::new(),
            session_id: Some(session_id),
            source: LeadSource::ChatFlow(kind),
            details,
            intake: None,
            received_at: Timestamp::now(),
        }
    }

    /// A record for a completed legal intake.
    pub fn from_intake(payload: IntakePayload) -> Self {
        Self {
            id: LeadId::new(),
            session_id: None,
            source: LeadSource::LegalIntake,
            details: payload.contact.clone(),
            intake: Some(payload),
            received_at: Timestamp::now(),
        }
    }
}

/// Port for delivering captured leads.
///
/// Implementations must propagate delivery failures to the caller; the
/// application reports them as `LeadDeliveryFailed`.
#[async_trait]
pub trait LeadSink: Send + Sync {
    /// Deliver a single lead record.
    async fn deliver(&self, record: LeadRecord) -> Result<(), DomainError>;
}
