//! Legal services intake wizard.
//!
//! A five-step guided form that collects contact details, property context,
//! the legal question itself, and a consultation preference before producing
//! a payload for delivery. Steps advance only when the current section
//! validates, and the wizard supports stepping back without losing data.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode, StateMachine, ValidationError};
use crate::domain::lead::{LeadDetails, LeadGateRules};

/// Steps of the legal intake wizard, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntakeStep {
    Contact,
    Property,
    LegalQuery,
    Consultation,
    Review,
}

impl IntakeStep {
    /// The step preceding this one, if any.
    pub fn previous(&self) -> Option<IntakeStep> {
        match self {
            IntakeStep::Contact => None,
            IntakeStep::Property => Some(IntakeStep::Contact),
            IntakeStep::LegalQuery => Some(IntakeStep::Property),
            IntakeStep::Consultation => Some(IntakeStep::LegalQuery),
            IntakeStep::Review => Some(IntakeStep::Consultation),
        }
    }

    fn next(&self) -> Option<IntakeStep> {
        match self {
            IntakeStep::Contact => Some(IntakeStep::Property),
            IntakeStep::Property => Some(IntakeStep::LegalQuery),
            IntakeStep::LegalQuery => Some(IntakeStep::Consultation),
            IntakeStep::Consultation => Some(IntakeStep::Review),
            IntakeStep::Review => None,
        }
    }
}

impl StateMachine for IntakeStep {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.next() == Some(*target) || self.previous() == Some(*target)
    }

    fn valid_transitions(&self) -> Vec<IntakeStep> {
        self.next()
            .into_iter()
            .chain(self.previous())
            .collect()
    }

    fn is_terminal(&self) -> bool {
        *self == IntakeStep::Review
    }
}

/// Property context for a legal question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDetails {
    pub city: String,
    pub property_kind: String,
}

impl PropertyDetails {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.city.trim().is_empty() {
            return Err(ValidationError::empty_field("city"));
        }
        if self.property_kind.trim().is_empty() {
            return Err(ValidationError::empty_field("property_kind"));
        }
        Ok(())
    }
}

/// The legal question being raised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalQuery {
    pub category: String,
    pub description: String,
    /// Names of documents the requester already holds.
    pub documents: Vec<String>,
}

impl LegalQuery {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.category.trim().is_empty() {
            return Err(ValidationError::empty_field("category"));
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::empty_field("description"));
        }
        Ok(())
    }
}

/// How the requester wants the consultation to happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsultationMode {
    Call,
    Video,
    InPerson,
}

/// Consultation scheduling preference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultationPreference {
    pub mode: ConsultationMode,
    pub preferred_time: String,
}

impl ConsultationPreference {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.preferred_time.trim().is_empty() {
            return Err(ValidationError::empty_field("preferred_time"));
        }
        Ok(())
    }
}

/// Finished intake ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakePayload {
    pub contact: LeadDetails,
    pub property: PropertyDetails,
    pub query: LegalQuery,
    pub consultation: ConsultationPreference,
}

/// In-progress intake state.
///
/// Sections are filled step by step; each setter validates its section and
/// advances the wizard on success. Nothing is mutated on a validation error.
#[derive(Debug, Clone, Default)]
pub struct IntakeDraft {
    step: Option<IntakeStep>,
    contact: Option<LeadDetails>,
    property: Option<PropertyDetails>,
    query: Option<LegalQuery>,
    consultation: Option<ConsultationPreference>,
}

impl IntakeDraft {
    pub fn new() -> Self {
        Self {
            step: Some(IntakeStep::Contact),
            ..Self::default()
        }
    }

    /// The step currently awaiting input.
    pub fn step(&self) -> IntakeStep {
        self.step.unwrap_or(IntakeStep::Contact)
    }

    /// Records contact details and advances to the property step.
    pub fn set_contact(&mut self, contact: LeadDetails) -> Result<(), DomainError> {
        self.expect_step(IntakeStep::Contact)?;
        contact.validate(&LeadGateRules::default())?;
        self.contact = Some(contact);
        self.advance();
        Ok(())
    }

    /// Records property context and advances to the legal query step.
    pub fn set_property(&mut self, property: PropertyDetails) -> Result<(), DomainError> {
        self.expect_step(IntakeStep::Property)?;
        property.validate()?;
        self.property = Some(property);
        self.advance();
        Ok(())
    }

    /// Records the legal question and advances to the consultation step.
    pub fn set_query(&mut self, query: LegalQuery) -> Result<(), DomainError> {
        self.expect_step(IntakeStep::LegalQuery)?;
        query.validate()?;
        self.query = Some(query);
        self.advance();
        Ok(())
    }

    /// Records the consultation preference and advances to review.
    pub fn set_consultation(
        &mut self,
        consultation: ConsultationPreference,
    ) -> Result<(), DomainError> {
        self.expect_step(IntakeStep::Consultation)?;
        consultation.validate()?;
        self.consultation = Some(consultation);
        self.advance();
        Ok(())
    }

    /// Steps back to the previous section, keeping entered data.
    pub fn back(&mut self) -> Result<(), DomainError> {
        match self.step().previous() {
            Some(previous) => {
                self.step = Some(previous);
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "already at the first intake step",
            )),
        }
    }

    /// Produces the delivery payload.
    ///
    /// # Errors
    ///
    /// `IntakeIncomplete` unless the wizard has reached review with every
    /// section filled.
    pub fn payload(&self) -> Result<IntakePayload, DomainError> {
        let incomplete =
            || DomainError::new(ErrorCode::IntakeIncomplete, "intake has unfinished sections");
        if self.step() != IntakeStep::Review {
            return Err(incomplete());
        }
        Ok(IntakePayload {
            contact: self.contact.clone().ok_or_else(incomplete)?,
            property: self.property.clone().ok_or_else(incomplete)?,
            query: self.query.clone().ok_or_else(incomplete)?,
            consultation: self.consultation.clone().ok_or_else(incomplete)?,
        })
    }

    fn expect_step(&self, expected: IntakeStep) -> Result<(), DomainError> {
        if self.step() == expected {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("intake is at the {:?} step", self.step()),
            ))
        }
    }

    fn advance(&mut self) {
        self.step = self.step().next();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact() -> LeadDetails {
        LeadDetails::new("Asha", "asha@example.com", "9876543210", None)
    }

    fn property() -> PropertyDetails {
        PropertyDetails {
            city: "Bangalore".to_string(),
            property_kind: "Apartment".to_string(),
        }
    }

    fn query() -> LegalQuery {
        LegalQuery {
            category: "Title verification".to_string(),
            description: "Need the sale deed checked before purchase.".to_string(),
            documents: vec!["Sale deed".to_string()],
        }
    }

    fn consultation() -> ConsultationPreference {
        ConsultationPreference {
            mode: ConsultationMode::Call,
            preferred_time: "Weekday evenings".to_string(),
        }
    }

    fn filled() -> IntakeDraft {
        let mut draft = IntakeDraft::new();
        draft.set_contact(contact()).unwrap();
        draft.set_property(property()).unwrap();
        draft.set_query(query()).unwrap();
        draft.set_consultation(consultation()).unwrap();
        draft
    }

    mod step_machine {
        use super::*;

        #[test]
        fn transitions_are_adjacent_only() {
            assert!(IntakeStep::Contact.can_transition_to(&IntakeStep::Property));
            assert!(IntakeStep::Property.can_transition_to(&IntakeStep::Contact));
            assert!(!IntakeStep::Contact.can_transition_to(&IntakeStep::Review));
            assert!(!IntakeStep::Review.can_transition_to(&IntakeStep::Contact));
        }

        #[test]
        fn review_is_terminal() {
            assert!(IntakeStep::Review.is_terminal());
            assert!(!IntakeStep::Consultation.is_terminal());
        }
    }

    mod draft {
        use super::*;

        #[test]
        fn walks_all_steps_in_order() {
            let mut draft = IntakeDraft::new();
            assert_eq!(draft.step(), IntakeStep::Contact);
            draft.set_contact(contact()).unwrap();
            assert_eq!(draft.step(), IntakeStep::Property);
            draft.set_property(property()).unwrap();
            assert_eq!(draft.step(), IntakeStep::LegalQuery);
            draft.set_query(query()).unwrap();
            assert_eq!(draft.step(), IntakeStep::Consultation);
            draft.set_consultation(consultation()).unwrap();
            assert_eq!(draft.step(), IntakeStep::Review);
        }

        #[test]
        fn rejects_out_of_order_sections() {
            let mut draft = IntakeDraft::new();
            let err = draft.set_property(property()).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidStateTransition);
        }

        #[test]
        fn invalid_section_does_not_advance() {
            let mut draft = IntakeDraft::new();
            let bad = LeadDetails::new("", "asha@example.com", "9876543210", None);
            assert!(draft.set_contact(bad).is_err());
            assert_eq!(draft.step(), IntakeStep::Contact);
        }

        #[test]
        fn back_preserves_entered_data() {
            let mut draft = filled();
            draft.back().unwrap();
            assert_eq!(draft.step(), IntakeStep::Consultation);
            draft.set_consultation(consultation()).unwrap();
            assert!(draft.payload().is_ok());
        }

        #[test]
        fn back_from_first_step_fails() {
            let mut draft = IntakeDraft::new();
            assert!(draft.back().is_err());
        }

        #[test]
        fn payload_requires_review_step() {
            let mut draft = IntakeDraft::new();
            draft.set_contact(contact()).unwrap();
            let err = draft.payload().unwrap_err();
            assert_eq!(err.code, ErrorCode::IntakeIncomplete);
        }

        #[test]
        fn payload_carries_every_section() {
            let payload = filled().payload().unwrap();
            assert_eq!(payload.contact.name(), "Asha");
            assert_eq!(payload.property.city, "Bangalore");
            assert_eq!(payload.query.documents.len(), 1);
            assert_eq!(payload.consultation.mode, ConsultationMode::Call);
        }
    }
}
