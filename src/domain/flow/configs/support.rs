//! Support flows: plans, property pages, and home services.
//!
//! All three share one shape: pick a topic, describe the need in free
//! text, pass the lead gate, then a follow-up close. Only the topics,
//! greetings, and gate rules differ.

use crate::domain::catalog::PropertyRef;
use crate::domain::flow::kind::FlowKind;
use crate::domain::flow::navigation::ListingType;
use crate::domain::flow::rules::{
    EffectSpec, FlowConfig, InputMatcher, NextStep, OptionSource, StepSpec, TransitionRule,
};
use crate::domain::flow::step::FlowStep;
use crate::domain::lead::LeadGateRules;
use crate::domain::routing::ServiceKind;

const PLAN_TOPICS: &[&str] = &["Silver Plan", "Gold Plan", "Platinum Plan"];

const PROPERTY_TOPICS: &[&str] = &[
    "Schedule a visit",
    "Price details",
    "Loan assistance",
    "Talk to the owner",
];

/// Flow for the subscription plans page.
pub fn plan_config() -> FlowConfig {
    FlowConfig {
        kind: FlowKind::PlanSupport,
        listing: ListingType::Buy,
        greeting: vec!["Hi! Have questions about our plans? I can help.".to_string()],
        initial_step: FlowStep::TopicSelection,
        steps: support_steps(
            "Which plan are you interested in?",
            OptionSource::Fixed(PLAN_TOPICS),
            "What would you like to know about it?",
        ),
        lead_gate: LeadGateRules {
            requires_ten_digit_phone: false,
            extra_field: Some("preferred_plan"),
        },
        property_card: None,
    }
}

/// Flow for a property listing page. The listing, when known, rides along
/// as a card on the greeting.
pub fn property_config(property: Option<PropertyRef>) -> FlowConfig {
    let greeting = match &property {
        Some(p) => format!("Hi! I can help you with {}.", p.title),
        None => "Hi! I can help you with this property.".to_string(),
    };
    FlowConfig {
        kind: FlowKind::PropertySupport,
        listing: ListingType::Buy,
        greeting: vec![greeting],
        initial_step: FlowStep::TopicSelection,
        steps: support_steps(
            "What would you like to do?",
            OptionSource::Fixed(PROPERTY_TOPICS),
            "Tell me a bit more so we can set that up.",
        ),
        lead_gate: LeadGateRules::default(),
        property_card: property,
    }
}

/// Flow for the home services pages. When the visitor came from a specific
/// service, the topic question is skipped.
pub fn service_config(service: Option<ServiceKind>) -> FlowConfig {
    let (greeting, initial_step) = match service {
        Some(kind) => (
            format!("Hi! I see you're interested in {}.", kind.label()),
            FlowStep::DetailGathering,
        ),
        None => (
            "Hi! Which of our home services can I help you with?".to_string(),
            FlowStep::TopicSelection,
        ),
    };
    FlowConfig {
        kind: FlowKind::ServiceSupport,
        listing: ListingType::Buy,
        greeting: vec![greeting],
        initial_step,
        steps: support_steps(
            "Pick a service:",
            OptionSource::Services,
            "Tell me what you need and we'll line up the right expert.",
        ),
        lead_gate: LeadGateRules::default(),
        property_card: None,
    }
}

fn support_steps(
    topic_prompt: &str,
    topics: OptionSource,
    detail_prompt: &str,
) -> Vec<StepSpec> {
    vec![
        StepSpec::new(FlowStep::TopicSelection, topic_prompt, topics).rule(
            TransitionRule::new(
                InputMatcher::AnyOption,
                NextStep::Fixed(FlowStep::DetailGathering),
            )
            .ack("Sure, I can help with that."),
        ),
        StepSpec::new(FlowStep::DetailGathering, detail_prompt, OptionSource::None).rule(
            TransitionRule::new(
                InputMatcher::FreeText,
                NextStep::Fixed(FlowStep::LeadCapture),
            )
            .ack("Thanks for the details."),
        ),
        StepSpec::new(
            FlowStep::LeadCapture,
            "Please share your contact details so our team can assist.",
            OptionSource::Fixed(&["Fill details"]),
        )
        .rule(
            TransitionRule::new(InputMatcher::Exact("Fill details"), NextStep::Stay)
                .effect(EffectSpec::OpenLeadForm),
        )
        .rule(
            TransitionRule::new(
                InputMatcher::LeadSubmitted,
                NextStep::Fixed(FlowStep::FollowUp),
            )
            .ack("Thank you! Our team will contact you shortly."),
        ),
        StepSpec::new(
            FlowStep::FollowUp,
            "Anything else I can help you with?",
            OptionSource::Fixed(&["Contact Support", "That's all"]),
        )
        .rule(
            TransitionRule::new(InputMatcher::Exact("Contact Support"), NextStep::Stay)
                .ack("Connecting you with our support team.")
                .effect(EffectSpec::NavigateContact)
                .ends_flow(),
        )
        .rule(
            TransitionRule::new(InputMatcher::Exact("That's all"), NextStep::Stay)
                .ack("Happy to help. Have a great day!")
                .ends_flow(),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::flow::session::FlowSession;
    use crate::domain::lead::LeadDetails;

    fn listing() -> PropertyRef {
        PropertyRef {
            id: "p-7".to_string(),
            title: "Lakeview Villa".to_string(),
            price: "2.4Cr".to_string(),
            location: "Hyderabad".to_string(),
            bedrooms: 4,
            bathrooms: 4,
            area: "3200 sqft".to_string(),
            image: "/img/p-7.jpg".to_string(),
            kind: "Villa".to_string(),
        }
    }

    #[test]
    fn plan_flow_collects_topic_details_and_lead() {
        let mut session = FlowSession::start(plan_config()).unwrap();
        session.handle_input("Gold Plan").unwrap();
        session.handle_input("Does it include photography?").unwrap();
        assert_eq!(session.step(), FlowStep::LeadCapture);

        let missing_plan = LeadDetails::new("Asha", "asha@example.com", "9876543210", None);
        assert!(session.submit_lead(missing_plan).is_err());

        let complete = LeadDetails::new(
            "Asha",
            "asha@example.com",
            "9876543210",
            Some("Gold Plan".to_string()),
        );
        session.submit_lead(complete).unwrap();
        assert_eq!(session.step(), FlowStep::FollowUp);
    }

    #[test]
    fn property_flow_attaches_the_listing_card() {
        let session = FlowSession::start(property_config(Some(listing()))).unwrap();
        let first = &session.transcript()[0];
        assert_eq!(first.text(), "Hi! I can help you with Lakeview Villa.");
        assert_eq!(first.property_card().unwrap().title, "Lakeview Villa");
    }

    #[test]
    fn service_flow_skips_topic_when_service_is_known() {
        let session = FlowSession::start(service_config(Some(ServiceKind::HomeLoans))).unwrap();
        assert_eq!(session.step(), FlowStep::DetailGathering);
        assert!(session.transcript()[0].text().contains("Home Loans"));
    }

    #[test]
    fn service_flow_offers_every_service_as_a_topic() {
        let session = FlowSession::start(service_config(None)).unwrap();
        let prompt = session.transcript().last().unwrap();
        assert_eq!(prompt.options().len(), ServiceKind::ALL.len());
    }

    #[test]
    fn follow_up_close_ends_the_flow() {
        let mut session = FlowSession::start(property_config(None)).unwrap();
        session.handle_input("Schedule a visit").unwrap();
        session.handle_input("This weekend works").unwrap();
        session
            .submit_lead(LeadDetails::new("Asha", "a@b.c", "12345", None))
            .unwrap();
        let turn = session.handle_input("That's all").unwrap();
        assert!(turn.ended);
    }
}
