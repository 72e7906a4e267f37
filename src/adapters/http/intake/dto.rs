//! HTTP DTOs for the legal intake endpoint.

use serde::{Deserialize, Serialize};

use crate::application::handlers::{SubmitIntakeCommand, SubmitIntakeResult};
use crate::domain::lead::{ConsultationMode, LeadDetails};

/// Request carrying the four intake sections in one submission.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitIntakeRequest {
    pub contact: ContactSection,
    pub property: PropertySection,
    pub query: QuerySection,
    pub consultation: ConsultationSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactSection {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PropertySection {
    pub city: String,
    pub property_kind: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuerySection {
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub documents: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConsultationSection {
    pub mode: ConsultationMode,
    pub preferred_time: String,
}

impl From<SubmitIntakeRequest> for SubmitIntakeCommand {
    fn from(req: SubmitIntakeRequest) -> Self {
        SubmitIntakeCommand {
            contact: LeadDetails::new(
                req.contact.name,
                req.contact.email,
                req.contact.phone,
                None,
            ),
            property: crate::domain::lead::PropertyDetails {
                city: req.property.city,
                property_kind: req.property.property_kind,
            },
            query: crate::domain::lead::LegalQuery {
                category: req.query.category,
                description: req.query.description,
                documents: req.query.documents,
            },
            consultation: crate::domain::lead::ConsultationPreference {
                mode: req.consultation.mode,
                preferred_time: req.consultation.preferred_time,
            },
        }
    }
}

/// Response for an accepted intake.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitIntakeResponse {
    pub lead_id: String,
    pub message: String,
}

impl From<SubmitIntakeResult> for SubmitIntakeResponse {
    fn from(result: SubmitIntakeResult) -> Self {
        Self {
            lead_id: result.lead_id.to_string(),
            message: "Intake received. Our legal team will reach out.".to_string(),
        }
    }
}
