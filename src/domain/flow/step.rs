//! Flow steps within a conversation.
//!
//! Steps determine which prompt the bot shows next and which inputs are
//! valid. Unlike FlowStatus (which tracks lifecycle), the step is the
//! position inside a flow's question sequence; the valid transitions out
//! of a step are defined by the hosting flow's configuration, not here.

use serde::{Deserialize, Serialize};

/// The current step of a flow instance.
///
/// The first nine steps belong to the buyer/search funnels; the last four
/// are shared by the plan/property/service support funnels. `Complete` is
/// the follow-up step whose options either end the flow or loop back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowStep {
    /// Opening question: sell, post as agent/builder, or buy.
    RoleSelection,

    /// Seller-side branch offering the posting page.
    PostProperty,

    /// Pick one of the fixed property types.
    PropertyTypeSelection,

    /// Pick one of the fixed budget brackets.
    BudgetSelection,

    /// Pick a bedroom count (residential types only).
    BhkSelection,

    /// Free-text locality preference.
    LocationPreference,

    /// Pick a city from the inventory available for the chosen type.
    LocationSelection,

    /// Lead gate: offer the inline contact form.
    UserDetailsCollection,

    /// Free-text location requirements after the expert callback gate.
    LocationRequirements,

    /// Support funnels: pick a topic to discuss.
    TopicSelection,

    /// Support funnels: free-text description of the need.
    DetailGathering,

    /// Support funnels: lead gate before the follow-up promise.
    LeadCapture,

    /// Support funnels: wrap-up options after the lead is captured.
    FollowUp,

    /// Follow-up step offering Show Properties / Refine Search / Contact Support.
    Complete,
}

impl FlowStep {
    /// Returns a short label for the step, suitable for logs and APIs.
    pub fn label(&self) -> &'static str {
        match self {
            FlowStep::RoleSelection => "role_selection",
            FlowStep::PostProperty => "post_property",
            FlowStep::PropertyTypeSelection => "property_type_selection",
            FlowStep::BudgetSelection => "budget_selection",
            FlowStep::BhkSelection => "bhk_selection",
            FlowStep::LocationPreference => "location_preference",
            FlowStep::LocationSelection => "location_selection",
            FlowStep::UserDetailsCollection => "user_details_collection",
            FlowStep::LocationRequirements => "location_requirements",
            FlowStep::TopicSelection => "topic_selection",
            FlowStep::DetailGathering => "detail_gathering",
            FlowStep::LeadCapture => "lead_capture",
            FlowStep::FollowUp => "follow_up",
            FlowStep::Complete => "complete",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_snake_case() {
        let json = serde_json::to_string(&FlowStep::RoleSelection).unwrap();
        assert_eq!(json, "\"role_selection\"");
    }

    #[test]
    fn deserializes_from_snake_case() {
        let step: FlowStep = serde_json::from_str("\"budget_selection\"").unwrap();
        assert_eq!(step, FlowStep::BudgetSelection);
    }

    #[test]
    fn label_matches_serde_name() {
        for step in [
            FlowStep::RoleSelection,
            FlowStep::PostProperty,
            FlowStep::PropertyTypeSelection,
            FlowStep::BudgetSelection,
            FlowStep::BhkSelection,
            FlowStep::LocationPreference,
            FlowStep::LocationSelection,
            FlowStep::UserDetailsCollection,
            FlowStep::LocationRequirements,
            FlowStep::TopicSelection,
            FlowStep::DetailGathering,
            FlowStep::LeadCapture,
            FlowStep::FollowUp,
            FlowStep::Complete,
        ] {
            let json = serde_json::to_string(&step).unwrap();
            assert_eq!(json, format!("\"{}\"", step.label()));
        }
    }
}
