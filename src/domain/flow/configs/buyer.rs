//! The generic buyer flow, started from pages with no stronger signal.
//!
//! Opens with role selection: sellers, agents, and builders are steered to
//! the listing form, buyers through type, budget, and location to a
//! search handoff.

use crate::domain::catalog::{BUDGET_OPTIONS, BUYER_OPTION, ROLE_OPTIONS, SELLER_ROLES};
use crate::domain::flow::kind::FlowKind;
use crate::domain::flow::navigation::ListingType;
use crate::domain::flow::preferences::PreferenceField;
use crate::domain::flow::rules::{
    EffectSpec, FlowConfig, InputMatcher, NextStep, OptionSource, StepSpec, TransitionRule,
};
use crate::domain::flow::step::FlowStep;
use crate::domain::lead::LeadGateRules;

pub fn config() -> FlowConfig {
    FlowConfig {
        kind: FlowKind::Buyer,
        listing: ListingType::Buy,
        greeting: vec![
            "Hi! Welcome to EstateGuide.".to_string(),
            "I can help you find a property or get yours listed.".to_string(),
        ],
        initial_step: FlowStep::RoleSelection,
        steps: vec![
            StepSpec::new(
                FlowStep::RoleSelection,
                "To get started, tell me who you are:",
                OptionSource::Fixed(ROLE_OPTIONS),
            )
            .rule(
                TransitionRule::new(
                    InputMatcher::OneOf(SELLER_ROLES),
                    NextStep::Fixed(FlowStep::PostProperty),
                )
                .writes(PreferenceField::Role)
                .ack("Great! Listing with us is free and takes just a few minutes."),
            )
            .rule(
                TransitionRule::new(
                    InputMatcher::Exact(BUYER_OPTION),
                    NextStep::Fixed(FlowStep::PropertyTypeSelection),
                )
                .writes(PreferenceField::Role)
                .ack("Let's find you the right property."),
            ),
            StepSpec::new(
                FlowStep::PostProperty,
                "Ready when you are. Tap below to start your listing.",
                OptionSource::Fixed(&["Post Your Property"]),
            )
            .invalid_hint("Tap Post Your Property when you're ready to list.")
            .rule(
                TransitionRule::new(InputMatcher::Exact("Post Your Property"), NextStep::Stay)
                    .ack("Taking you to the listing form.")
                    .effect(EffectSpec::NavigatePostProperty)
                    .ends_flow(),
            ),
            StepSpec::new(
                FlowStep::PropertyTypeSelection,
                "What kind of property are you looking for?",
                OptionSource::PropertyTypes,
            )
            .rule(
                TransitionRule::new(
                    InputMatcher::AnyOption,
                    NextStep::Fixed(FlowStep::BudgetSelection),
                )
                .writes(PreferenceField::PropertyType),
            ),
            StepSpec::new(
                FlowStep::BudgetSelection,
                "What's your budget?",
                OptionSource::Fixed(BUDGET_OPTIONS),
            )
            .rule(
                TransitionRule::new(
                    InputMatcher::AnyOption,
                    NextStep::Fixed(FlowStep::LocationSelection),
                )
                .writes(PreferenceField::Budget),
            ),
            StepSpec::new(
                FlowStep::LocationSelection,
                "These locations have availability for your property type:",
                OptionSource::LocationsForSelectedType,
            )
            .empty_prompt("We don't have inventory for that property type right now.")
            .rule(TransitionRule::new(
                InputMatcher::Exact("Go Back"),
                NextStep::Fixed(FlowStep::PropertyTypeSelection),
            ))
            .rule(
                TransitionRule::new(InputMatcher::AnyOption, NextStep::Stay)
                    .writes(PreferenceField::Location)
                    .ack("Taking you to matching properties.")
                    .effect(EffectSpec::NavigateSearch)
                    .ends_flow(),
            ),
        ],
        lead_gate: LeadGateRules::default(),
        property_card: None,
    }
}
