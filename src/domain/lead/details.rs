//! Lead contact details and the gate rules that validate them.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Per-flow validation rules for the inline lead form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LeadGateRules {
    /// Require the phone number to be exactly 10 digits.
    pub requires_ten_digit_phone: bool,

    /// Name of an additional required field, when the flow collects one.
    pub extra_field: Option<&'static str>,
}

/// Contact details captured by a lead gate.
///
/// Validated only for non-emptiness, plus the phone pattern where the
/// hosting flow requires it. Construction trims surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadDetails {
    name: String,
    email: String,
    phone: String,
    extra: Option<String>,
}

impl LeadDetails {
    /// Creates lead details from raw form values.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        extra: Option<String>,
    ) -> Self {
        Self {
            name: name.into().trim().to_string(),
            email: email.into().trim().to_string(),
            phone: phone.into().trim().to_string(),
            extra: extra.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()),
        }
    }

    /// Validates the details against a flow's gate rules.
    ///
    /// # Errors
    ///
    /// - `EmptyField` for any missing required field
    /// - `InvalidFormat` when the phone pattern is required and not met
    pub fn validate(&self, rules: &LeadGateRules) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if self.email.is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        if self.phone.is_empty() {
            return Err(ValidationError::empty_field("phone"));
        }
        if rules.requires_ten_digit_phone
            && (self.phone.len() != 10 || !self.phone.chars().all(|c| c.is_ascii_digit()))
        {
            return Err(ValidationError::invalid_format(
                "phone",
                "expected exactly 10 digits",
            ));
        }
        if let Some(field) = rules.extra_field {
            if self.extra.is_none() {
                return Err(ValidationError::empty_field(field));
            }
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn extra(&self) -> Option<&str> {
        self.extra.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(name: &str, email: &str, phone: &str) -> LeadDetails {
        LeadDetails::new(name, email, phone, None)
    }

    #[test]
    fn accepts_complete_details() {
        let lead = details("Asha", "asha@example.com", "call me anytime");
        assert!(lead.validate(&LeadGateRules::default()).is_ok());
    }

    #[test]
    fn rejects_empty_name() {
        let lead = details("  ", "asha@example.com", "9876543210");
        assert!(lead.validate(&LeadGateRules::default()).is_err());
    }

    #[test]
    fn rejects_empty_email() {
        let lead = details("Asha", "", "9876543210");
        assert!(lead.validate(&LeadGateRules::default()).is_err());
    }

    #[test]
    fn rejects_empty_phone() {
        let lead = details("Asha", "asha@example.com", "");
        assert!(lead.validate(&LeadGateRules::default()).is_err());
    }

    #[test]
    fn ten_digit_rule_rejects_short_phone() {
        let rules = LeadGateRules {
            requires_ten_digit_phone: true,
            extra_field: None,
        };
        assert!(details("Asha", "a@b.c", "98765").validate(&rules).is_err());
        assert!(details("Asha", "a@b.c", "98765abcde").validate(&rules).is_err());
        assert!(details("Asha", "a@b.c", "9876543210").validate(&rules).is_ok());
    }

    #[test]
    fn extra_field_rule_requires_value() {
        let rules = LeadGateRules {
            requires_ten_digit_phone: false,
            extra_field: Some("preferred_plan"),
        };
        let missing = LeadDetails::new("Asha", "a@b.c", "123", None);
        assert!(missing.validate(&rules).is_err());

        let blank = LeadDetails::new("Asha", "a@b.c", "123", Some("  ".to_string()));
        assert!(blank.validate(&rules).is_err());

        let present = LeadDetails::new("Asha", "a@b.c", "123", Some("Gold Plan".to_string()));
        assert!(present.validate(&rules).is_ok());
    }

    #[test]
    fn construction_trims_whitespace() {
        let lead = LeadDetails::new(" Asha ", " a@b.c ", " 9876543210 ", None);
        assert_eq!(lead.name(), "Asha");
        assert_eq!(lead.email(), "a@b.c");
        assert_eq!(lead.phone(), "9876543210");
    }
}
