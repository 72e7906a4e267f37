//! Generic flow engine.
//!
//! Interprets a [`FlowConfig`] transition table against user input. The
//! engine is stateless; the session owns the current step and preferences
//! and applies the outcome the engine computes.

use crate::domain::catalog::{locations_for_label, PropertyType};
use crate::domain::flow::message::Message;
use crate::domain::flow::navigation::{NavigationTarget, SideEffect};
use crate::domain::flow::preferences::{PreferenceField, PreferenceSet};
use crate::domain::flow::rules::{
    EffectSpec, FlowConfig, InputMatcher, NextStep, OptionSource, StepSpec, TransitionRule,
    LEAD_SUBMITTED_INPUT,
};
use crate::domain::flow::step::FlowStep;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::routing::ServiceKind;

/// Fallback corrective message for unrecognized input.
const DEFAULT_INVALID_HINT: &str = "Sorry, I didn't catch that. Please pick one of the options.";

/// Option offered when a step's option source resolves to nothing.
const GO_BACK_OPTION: &str = "Go Back";

/// Result of evaluating one user input against the flow's rules.
#[derive(Debug, Clone)]
pub struct TransitionOutcome {
    /// Step the session should move to.
    pub next_step: FlowStep,

    /// Bot messages to append, in order.
    pub messages: Vec<Message>,

    /// Preference write to apply, if the matched rule records one.
    pub write: Option<(PreferenceField, String)>,

    /// Side effect for the host page.
    pub side_effect: Option<SideEffect>,

    /// Whether the flow ends after this turn.
    pub ends_flow: bool,

    /// False when the input matched no rule and the step re-prompted.
    pub recognized: bool,
}

/// Stateless interpreter for a single flow configuration.
pub struct FlowEngine<'a> {
    config: &'a FlowConfig,
}

impl<'a> FlowEngine<'a> {
    pub fn new(config: &'a FlowConfig) -> Self {
        Self { config }
    }

    /// Builds the prompt message for a step, with its resolved options.
    ///
    /// Used when the flow enters a step: at session start and after every
    /// transition that lands on a new step.
    pub fn prompt_message(
        &self,
        step: FlowStep,
        preferences: &PreferenceSet,
    ) -> Result<Message, DomainError> {
        let spec = self.spec(step)?;
        let options = self.resolve_options(spec, preferences);
        if options.is_empty() && !matches!(spec.options, OptionSource::None) {
            let text = spec
                .empty_prompt
                .clone()
                .unwrap_or_else(|| spec.prompt.clone());
            return Ok(Message::bot(text)?.with_options([GO_BACK_OPTION]));
        }
        Ok(Message::bot(spec.prompt.clone())?.with_options(options))
    }

    /// Evaluates user input against the current step's rules.
    ///
    /// Unrecognized input never changes state: the outcome stays on the
    /// same step and carries a corrective re-prompt with the same options.
    pub fn transition(
        &self,
        step: FlowStep,
        input: &str,
        preferences: &PreferenceSet,
    ) -> Result<TransitionOutcome, DomainError> {
        let spec = self.spec(step)?;
        let options = self.resolve_options(spec, preferences);
        let input = input.trim();

        let matched = spec
            .rules
            .iter()
            .find(|rule| Self::matches(&rule.matcher, input, &options));

        match matched {
            Some(rule) => self.apply(spec, rule, input, preferences),
            None => self.reprompt(spec, &options),
        }
    }

    fn apply(
        &self,
        spec: &StepSpec,
        rule: &TransitionRule,
        input: &str,
        preferences: &PreferenceSet,
    ) -> Result<TransitionOutcome, DomainError> {
        let write = rule.writes.map(|field| (field, input.to_string()));

        // Effects and branches see the preferences as they will be after
        // this turn's write is applied.
        let mut updated = preferences.clone();
        if let Some((field, value)) = &write {
            updated.set(*field, value.clone());
        }

        let next_step = match rule.next {
            NextStep::Stay => spec.step,
            NextStep::Fixed(step) => step,
            NextStep::ByPropertyKind { residential, other } => {
                let is_residential = updated
                    .get(PreferenceField::PropertyType)
                    .and_then(PropertyType::from_label)
                    .map(|t| t.is_residential())
                    .unwrap_or(false);
                if is_residential {
                    residential
                } else {
                    other
                }
            }
        };

        let side_effect = self.resolve_effect(rule.effect, &updated);

        let mut messages = Vec::new();
        if let Some(ack) = &rule.ack {
            messages.push(Message::bot(ack.clone())?);
        }
        if next_step != spec.step && !rule.ends_flow {
            messages.push(self.prompt_message(next_step, &updated)?);
        }

        Ok(TransitionOutcome {
            next_step,
            messages,
            write,
            side_effect,
            ends_flow: rule.ends_flow,
            recognized: true,
        })
    }

    fn reprompt(
        &self,
        spec: &StepSpec,
        options: &[String],
    ) -> Result<TransitionOutcome, DomainError> {
        let hint = spec
            .invalid_hint
            .clone()
            .unwrap_or_else(|| DEFAULT_INVALID_HINT.to_string());
        let message = if options.is_empty() && !matches!(spec.options, OptionSource::None) {
            Message::bot(hint)?.with_options([GO_BACK_OPTION])
        } else {
            Message::bot(hint)?.with_options(options.to_vec())
        };
        Ok(TransitionOutcome {
            next_step: spec.step,
            messages: vec![message],
            write: None,
            side_effect: None,
            ends_flow: false,
            recognized: false,
        })
    }

    fn resolve_effect(&self, effect: EffectSpec, preferences: &PreferenceSet) -> Option<SideEffect> {
        match effect {
            EffectSpec::None => None,
            EffectSpec::NavigatePostProperty => Some(SideEffect::Navigate {
                target: NavigationTarget::post_property(),
            }),
            EffectSpec::NavigateContact => Some(SideEffect::Navigate {
                target: NavigationTarget::contact(),
            }),
            EffectSpec::NavigateSearch => {
                let location = preferences.get(PreferenceField::Location).unwrap_or("");
                let property_type = preferences.get(PreferenceField::PropertyType).unwrap_or("");
                Some(SideEffect::Navigate {
                    target: NavigationTarget::search(self.config.listing, location, property_type),
                })
            }
            EffectSpec::OpenLeadForm => Some(SideEffect::OpenLeadForm),
        }
    }

    fn resolve_options(&self, spec: &StepSpec, preferences: &PreferenceSet) -> Vec<String> {
        match spec.options {
            OptionSource::None => Vec::new(),
            OptionSource::Fixed(labels) => labels.iter().map(|l| l.to_string()).collect(),
            OptionSource::PropertyTypes => PropertyType::labels()
                .into_iter()
                .map(str::to_string)
                .collect(),
            OptionSource::Services => ServiceKind::labels()
                .into_iter()
                .map(str::to_string)
                .collect(),
            OptionSource::LocationsForSelectedType => preferences
                .get(PreferenceField::PropertyType)
                .map(locations_for_label)
                .unwrap_or(&[])
                .iter()
                .map(|l| l.to_string())
                .collect(),
        }
    }

    fn matches(matcher: &InputMatcher, input: &str, options: &[String]) -> bool {
        match matcher {
            InputMatcher::Exact(label) => input.eq_ignore_ascii_case(label),
            InputMatcher::OneOf(labels) => labels.iter().any(|l| input.eq_ignore_ascii_case(l)),
            InputMatcher::AnyOption => options.iter().any(|o| input.eq_ignore_ascii_case(o)),
            InputMatcher::FreeText => !input.is_empty() && input != LEAD_SUBMITTED_INPUT,
            InputMatcher::LeadSubmitted => input == LEAD_SUBMITTED_INPUT,
        }
    }

    fn spec(&self, step: FlowStep) -> Result<&StepSpec, DomainError> {
        self.config.step(step).ok_or_else(|| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("flow has no spec for step {:?}", step),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::flow::kind::FlowKind;
    use crate::domain::flow::navigation::ListingType;
    use crate::domain::lead::LeadGateRules;
    use proptest::prelude::*;

    fn test_config() -> FlowConfig {
        FlowConfig {
            kind: FlowKind::Buyer,
            listing: ListingType::Buy,
            greeting: vec!["Hello!".to_string()],
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
                            other: FlowStep::LocationSelection,
                        },
                    )
                    .writes(PreferenceField::PropertyType),
                ),
                StepSpec::new(
                    FlowStep::BhkSelection,
                    "How many bedrooms?",
                    OptionSource::Fixed(&["1 BHK", "2 BHK"]),
                )
                .rule(
                    TransitionRule::new(
                        InputMatcher::AnyOption,
                        NextStep::Fixed(FlowStep::LocationSelection),
                    )
                    .writes(PreferenceField::Bedrooms),
                ),
                StepSpec::new(
                    FlowStep::LocationSelection,
                    "Pick a location with availability:",
                    OptionSource::LocationsForSelectedType,
                )
                .empty_prompt("No locations have inventory for that type right now.")
                .rule(
                    TransitionRule::new(InputMatcher::AnyOption, NextStep::Stay)
                        .writes(PreferenceField::Location)
                        .effect(EffectSpec::NavigateSearch)
                        .ends_flow(),
                ),
            ],
            lead_gate: LeadGateRules::default(),
            property_card: None,
        }
    }

    fn outcome_for(input: &str, prefs: &PreferenceSet) -> TransitionOutcome {
        let config = test_config();
        let engine = FlowEngine::new(&config);
        engine
            .transition(FlowStep::PropertyTypeSelection, input, prefs)
            .unwrap()
    }

    #[test]
    fn recognized_option_advances_and_writes() {
        let outcome = outcome_for("Villa", &PreferenceSet::default());
        assert!(outcome.recognized);
        assert_eq!(outcome.next_step, FlowStep::BhkSelection);
        assert_eq!(
            outcome.write,
            Some((PreferenceField::PropertyType, "Villa".to_string()))
        );
    }

    #[test]
    fn matching_ignores_case_and_whitespace() {
        let outcome = outcome_for("  villa  ", &PreferenceSet::default());
        assert!(outcome.recognized);
        assert_eq!(outcome.write.unwrap().1, "villa");
    }

    #[test]
    fn property_kind_branch_sends_plots_past_bedrooms() {
        let outcome = outcome_for("Plot/Land", &PreferenceSet::default());
        assert_eq!(outcome.next_step, FlowStep::LocationSelection);
    }

    #[test]
    fn unrecognized_input_stays_and_reprompts_with_options() {
        let outcome = outcome_for("something else entirely", &PreferenceSet::default());
        assert!(!outcome.recognized);
        assert_eq!(outcome.next_step, FlowStep::PropertyTypeSelection);
        assert!(outcome.write.is_none());
        assert!(outcome.side_effect.is_none());
        assert_eq!(outcome.messages.len(), 1);
        assert!(!outcome.messages[0].options().is_empty());
    }

    #[test]
    fn location_options_follow_selected_property_type() {
        let config = test_config();
        let engine = FlowEngine::new(&config);

        let mut prefs = PreferenceSet::default();
        prefs.set(PreferenceField::PropertyType, "Villa");

        let prompt = engine
            .prompt_message(FlowStep::LocationSelection, &prefs)
            .unwrap();
        assert_eq!(prompt.options(), &["Bangalore", "Hyderabad"]);
    }

    #[test]
    fn empty_option_pool_offers_go_back() {
        let config = test_config();
        let engine = FlowEngine::new(&config);

        // No property type selected yet, so the pool is empty.
        let prompt = engine
            .prompt_message(FlowStep::LocationSelection, &PreferenceSet::default())
            .unwrap();
        assert_eq!(prompt.options(), &[GO_BACK_OPTION]);
        assert_eq!(
            prompt.text(),
            "No locations have inventory for that type right now."
        );
    }

    #[test]
    fn search_effect_builds_url_from_updated_preferences() {
        let config = test_config();
        let engine = FlowEngine::new(&config);

        let mut prefs = PreferenceSet::default();
        prefs.set(PreferenceField::PropertyType, "Villa");

        let outcome = engine
            .transition(FlowStep::LocationSelection, "Hyderabad", &prefs)
            .unwrap();
        assert!(outcome.ends_flow);
        match outcome.side_effect {
            Some(SideEffect::Navigate { target }) => {
                assert_eq!(
                    target.href(),
                    "/search?type=buy&location=Hyderabad&propertyType=Villa"
                );
            }
            other => panic!("expected navigation, got {:?}", other),
        }
    }

    #[test]
    fn ack_precedes_next_prompt() {
        let config = FlowConfig {
            steps: vec![
                StepSpec::new(
                    FlowStep::RoleSelection,
                    "Who are you?",
                    OptionSource::Fixed(&["Seller"]),
                )
                .rule(
                    TransitionRule::new(
                        InputMatcher::Exact("Seller"),
                        NextStep::Fixed(FlowStep::PostProperty),
                    )
                    .ack("Great, let's get your property listed."),
                ),
                StepSpec::new(
                    FlowStep::PostProperty,
                    "Ready to post?",
                    OptionSource::Fixed(&["Post Property"]),
                ),
            ],
            initial_step: FlowStep::RoleSelection,
            ..test_config()
        };
        let engine = FlowEngine::new(&config);
        let outcome = engine
            .transition(FlowStep::RoleSelection, "Seller", &PreferenceSet::default())
            .unwrap();
        assert_eq!(outcome.messages.len(), 2);
        assert_eq!(outcome.messages[0].text(), "Great, let's get your property listed.");
        assert_eq!(outcome.messages[1].text(), "Ready to post?");
    }

    #[test]
    fn missing_step_spec_is_internal_error() {
        let config = test_config();
        let engine = FlowEngine::new(&config);
        let err = engine
            .transition(FlowStep::Complete, "anything", &PreferenceSet::default())
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InternalError);
    }

    proptest! {
        // Unrecognized input must never move the step or write a preference,
        // no matter what the user types.
        #[test]
        fn arbitrary_garbage_never_changes_state(input in "[a-z0-9 ?!]{1,40}") {
            let config = test_config();
            let engine = FlowEngine::new(&config);
            let prefs = PreferenceSet::default();
            let outcome = engine
                .transition(FlowStep::PropertyTypeSelection, &input, &prefs)
                .unwrap();
            if !outcome.recognized {
                prop_assert_eq!(outcome.next_step, FlowStep::PropertyTypeSelection);
                prop_assert!(outcome.write.is_none());
                prop_assert!(outcome.side_effect.is_none());
                prop_assert!(!outcome.ends_flow);
            }
        }
    }
}
