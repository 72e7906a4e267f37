//! SubmitIntakeHandler - Accepts a completed legal-services intake.
//!
//! The wizard itself runs client-side; this handler replays the submitted
//! sections through an `IntakeDraft` so server-side validation matches the
//! step rules exactly, then delivers the payload as one lead.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::foundation::{DomainError, ErrorCode, LeadId};
use crate::domain::lead::{
    ConsultationPreference, IntakeDraft, LeadDetails, LegalQuery, PropertyDetails,
};
use crate::ports::{LeadRecord, LeadSink};

/// Command carrying the four intake sections.
#[derive(Debug, Clone)]
pub struct SubmitIntakeCommand {
    pub contact: LeadDetails,
    pub property: PropertyDetails,
    pub query: LegalQuery,
    pub consultation: ConsultationPreference,
}

/// Result of an accepted intake.
#[derive(Debug, Clone)]
pub struct SubmitIntakeResult {
    pub lead_id: LeadId,
}

/// Handler for legal intake submissions.
pub struct SubmitIntakeHandler {
    sink: Arc<dyn LeadSink>,
}

impl SubmitIntakeHandler {
    pub fn new(sink: Arc<dyn LeadSink>) -> Self {
        Self { sink }
    }

    pub async fn handle(&self, cmd: SubmitIntakeCommand) -> Result<SubmitIntakeResult, DomainError> {
        let mut draft = IntakeDraft::new();
        draft.set_contact(cmd.contact)?;
        draft.set_property(cmd.property)?;
        draft.set_query(cmd.query)?;
        draft.set_consultation(cmd.consultation)?;
        let payload = draft.payload()?;

        let record = LeadRecord::from_intake(payload);
        let lead_id = record.id;
        self.sink.deliver(record).await.map_err(|err| {
            warn!(lead_id = %lead_id, error = %err, "intake delivery failed");
            DomainError::new(ErrorCode::LeadDeliveryFailed, "could not deliver the intake")
        })?;

        info!(lead_id = %lead_id, "legal intake captured");
        Ok(SubmitIntakeResult { lead_id })
    }
}
