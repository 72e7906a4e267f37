//! The search-page flow.
//!
//! Narrows a property search through type, bedrooms, and area, then offers
//! a results handoff with an optional expert-assist detour behind a lead
//! gate. The listing type comes from the search tab the visitor had open.

use crate::domain::catalog::{BHK_OPTIONS, BUDGET_OPTIONS};
use crate::domain::flow::kind::FlowKind;
use crate::domain::flow::navigation::ListingType;
use crate::domain::flow::preferences::PreferenceField;
use crate::domain::flow::rules::{
    EffectSpec, FlowConfig, InputMatcher, NextStep, OptionSource, StepSpec, TransitionRule,
};
use crate::domain::flow::step::FlowStep;
use crate::domain::lead::LeadGateRules;

const NEXT_ACTIONS: &[&str] = &["Show Properties", "Refine Search", "Contact Support"];

pub fn config(listing: ListingType) -> FlowConfig {
    FlowConfig {
        kind: FlowKind::Search,
        listing,
        greeting: vec![
            "Hi! I can help narrow down your property search.".to_string(),
        ],
        initial_step: FlowStep::PropertyTypeSelection,
        steps: vec![
            StepSpec::new(
                FlowStep::PropertyTypeSelection,
                "What kind of property are you looking for?",
                OptionSource::PropertyTypes,
            )
            .rule(
                TransitionRule::new(
                    InputMatcher::AnyOption,
                    NextStep::ByPropertyKind {
                        residential: FlowStep::BhkSelection,
                        other: FlowStep::LocationPreference,
                    },
                )
                .writes(PreferenceField::PropertyType),
            ),
            StepSpec::new(
                FlowStep::BhkSelection,
                "How many bedrooms?",
                OptionSource::Fixed(BHK_OPTIONS),
            )
            .rule(
                TransitionRule::new(
                    InputMatcher::AnyOption,
                    NextStep::Fixed(FlowStep::LocationPreference),
                )
                .writes(PreferenceField::Bedrooms),
            ),
            StepSpec::new(
                FlowStep::LocationPreference,
                "Which area should I search in? Type a locality or city.",
                OptionSource::None,
            )
            .rule(
                TransitionRule::new(InputMatcher::FreeText, NextStep::Fixed(FlowStep::Complete))
                    .writes(PreferenceField::Location)
                    .ack("Got it."),
            ),
            StepSpec::new(
                FlowStep::Complete,
                "Here's what I can do next:",
                OptionSource::Fixed(NEXT_ACTIONS),
            )
            .rule(
                TransitionRule::new(InputMatcher::Exact("Show Properties"), NextStep::Stay)
                    .ack("Opening matching properties.")
                    .effect(EffectSpec::NavigateSearch)
                    .ends_flow(),
            )
            .rule(TransitionRule::new(
                InputMatcher::Exact("Refine Search"),
                NextStep::Fixed(FlowStep::BudgetSelection),
            ))
            .rule(
                TransitionRule::new(InputMatcher::Exact("Contact Support"), NextStep::Stay)
                    .ack("Connecting you with our support team.")
                    .effect(EffectSpec::NavigateContact)
                    .ends_flow(),
            ),
            StepSpec::new(
                FlowStep::BudgetSelection,
                "What's your budget?",
                OptionSource::Fixed(BUDGET_OPTIONS),
            )
            .rule(
                TransitionRule::new(
                    InputMatcher::AnyOption,
                    NextStep::Fixed(FlowStep::UserDetailsCollection),
                )
                .writes(PreferenceField::Budget),
            ),
            StepSpec::new(
                FlowStep::UserDetailsCollection,
                "Share your details and our experts will shortlist options for you.",
                OptionSource::Fixed(&["Fill details"]),
            )
            .rule(
                TransitionRule::new(InputMatcher::Exact("Fill details"), NextStep::Stay)
                    .effect(EffectSpec::OpenLeadForm),
            )
            .rule(
                TransitionRule::new(
                    InputMatcher::LeadSubmitted,
                    NextStep::Fixed(FlowStep::LocationRequirements),
                )
                .ack("Thanks! One of our experts will reach out soon."),
            ),
            StepSpec::new(
                FlowStep::LocationRequirements,
                "Any specific requirements about the locality? Schools, metro access, anything.",
                OptionSource::None,
            )
            .rule(
                TransitionRule::new(InputMatcher::FreeText, NextStep::Fixed(FlowStep::Complete))
                    .writes(PreferenceField::Location)
                    .ack("Noted, I've added that to your request."),
            ),
        ],
        lead_gate: LeadGateRules {
            requires_ten_digit_phone: true,
            extra_field: None,
        },
        property_card: None,
    }
}
