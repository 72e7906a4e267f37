//! Lead capture: contact details, gate rules, and the legal intake wizard.

pub mod details;
pub mod intake;

pub use details::{LeadDetails, LeadGateRules};
pub use intake::{
    ConsultationMode, ConsultationPreference, IntakeDraft, IntakePayload, IntakeStep, LegalQuery,
    PropertyDetails,
};
