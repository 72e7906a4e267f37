//! Declarative flow configuration.
//!
//! Every conversational flow is described by a [`FlowConfig`]: a greeting,
//! an initial step, and a table of per-step specs. Each spec pairs the
//! prompt shown for the step with the transition rules evaluated against
//! user input. One generic engine interprets these tables, so adding a flow
//! means writing data, not control flow.

use crate::domain::catalog::PropertyRef;
use crate::domain::flow::kind::FlowKind;
use crate::domain::flow::navigation::ListingType;
use crate::domain::flow::preferences::PreferenceField;
use crate::domain::flow::step::FlowStep;
use crate::domain::lead::LeadGateRules;

/// Synthetic input injected when the lead gate accepts a submission.
///
/// Never typed by a user; the session feeds it to the engine after a
/// successful lead capture so the flow can acknowledge and move on.
pub const LEAD_SUBMITTED_INPUT: &str = "__lead_submitted__";

/// How a rule decides whether a given input activates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMatcher {
    /// Matches one specific option label.
    Exact(&'static str),

    /// Matches any label in the list.
    OneOf(&'static [&'static str]),

    /// Matches any of the options presented for the step.
    AnyOption,

    /// Matches any non-empty text.
    FreeText,

    /// Matches only the synthetic lead submission input.
    LeadSubmitted,
}

/// Where a step's quick-reply options come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionSource {
    /// The step takes free text only.
    None,

    /// A fixed set of labels.
    Fixed(&'static [&'static str]),

    /// The property type catalog.
    PropertyTypes,

    /// The marketplace's home services.
    Services,

    /// Locations with inventory for the property type already chosen in
    /// this session. Empty when nothing is available.
    LocationsForSelectedType,
}

/// Which step a rule moves the flow to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextStep {
    /// Remain on the current step.
    Stay,

    /// Move to a specific step.
    Fixed(FlowStep),

    /// Branch on whether the chosen property type is residential.
    ByPropertyKind { residential: FlowStep, other: FlowStep },
}

/// Side effect a rule asks the host page to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectSpec {
    None,
    NavigatePostProperty,
    /// Navigate to search results built from the session's preferences.
    NavigateSearch,
    NavigateContact,
    OpenLeadForm,
}

/// One transition rule within a step.
#[derive(Debug, Clone)]
pub struct TransitionRule {
    /// Input pattern that activates this rule.
    pub matcher: InputMatcher,

    /// Preference field the matched input is written to, if any.
    pub writes: Option<PreferenceField>,

    /// Step the flow moves to when the rule fires.
    pub next: NextStep,

    /// Acknowledgement message sent before the next step's prompt.
    pub ack: Option<String>,

    /// Side effect requested of the host page.
    pub effect: EffectSpec,

    /// Whether the flow ends after this rule fires.
    pub ends_flow: bool,
}

impl TransitionRule {
    /// A rule with no write, no ack, no effect, not ending the flow.
    pub fn new(matcher: InputMatcher, next: NextStep) -> Self {
        Self {
            matcher,
            writes: None,
            next,
            ack: None,
            effect: EffectSpec::None,
            ends_flow: false,
        }
    }

    pub fn writes(mut self, field: PreferenceField) -> Self {
        self.writes = Some(field);
        self
    }

    pub fn ack(mut self, message: impl Into<String>) -> Self {
        self.ack = Some(message.into());
        self
    }

    pub fn effect(mut self, effect: EffectSpec) -> Self {
        self.effect = effect;
        self
    }

    pub fn ends_flow(mut self) -> Self {
        self.ends_flow = true;
        self
    }
}

/// Prompt, options, and transition rules for one step.
#[derive(Debug, Clone)]
pub struct StepSpec {
    pub step: FlowStep,

    /// Prompt shown when the flow enters this step.
    pub prompt: String,

    pub options: OptionSource,

    /// Prompt substituted when the option source resolves to nothing,
    /// such as a property type with no inventory anywhere.
    pub empty_prompt: Option<String>,

    /// Corrective message for unrecognized input. A default is used
    /// when absent.
    pub invalid_hint: Option<String>,

    /// Rules evaluated in order; the first match wins.
    pub rules: Vec<TransitionRule>,
}

impl StepSpec {
    pub fn new(step: FlowStep, prompt: impl Into<String>, options: OptionSource) -> Self {
        Self {
            step,
            prompt: prompt.into(),
            options,
            empty_prompt: None,
            invalid_hint: None,
            rules: Vec::new(),
        }
    }

    pub fn empty_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.empty_prompt = Some(prompt.into());
        self
    }

    pub fn invalid_hint(mut self, hint: impl Into<String>) -> Self {
        self.invalid_hint = Some(hint.into());
        self
    }

    pub fn rule(mut self, rule: TransitionRule) -> Self {
        self.rules.push(rule);
        self
    }
}

/// Complete description of one conversational flow.
#[derive(Debug, Clone)]
pub struct FlowConfig {
    pub kind: FlowKind,

    /// Listing type used when building search navigation.
    pub listing: ListingType,

    /// Messages sent when the flow starts, before the first prompt.
    pub greeting: Vec<String>,

    pub initial_step: FlowStep,

    pub steps: Vec<StepSpec>,

    /// Validation rules for this flow's lead gate.
    pub lead_gate: LeadGateRules,

    /// Property card attached to the greeting, for flows opened from a
    /// listing page.
    pub property_card: Option<PropertyRef>,
}

impl FlowConfig {
    /// Looks up the spec for a step, if the flow defines one.
    pub fn step(&self, step: FlowStep) -> Option<&StepSpec> {
        self.steps.iter().find(|s| s.step == step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> FlowConfig {
        FlowConfig {
            kind: FlowKind::Buyer,
            listing: ListingType::Buy,
            greeting: vec!["Hi there!".to_string()],
            initial_step: FlowStep::RoleSelection,
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
                    .writes(PreferenceField::Role),
                ),
            ],
            lead_gate: LeadGateRules::default(),
            property_card: None,
        }
    }

    #[test]
    fn step_lookup_finds_defined_step() {
        let config = sample_config();
        let spec = config.step(FlowStep::RoleSelection).unwrap();
        assert_eq!(spec.prompt, "Who are you?");
    }

    #[test]
    fn step_lookup_misses_undefined_step() {
        let config = sample_config();
        assert!(config.step(FlowStep::BudgetSelection).is_none());
    }

    #[test]
    fn rule_builder_sets_all_fields() {
        let rule = TransitionRule::new(InputMatcher::AnyOption, NextStep::Stay)
            .writes(PreferenceField::Location)
            .ack("Noted.")
            .effect(EffectSpec::NavigateSearch)
            .ends_flow();

        assert_eq!(rule.writes, Some(PreferenceField::Location));
        assert_eq!(rule.ack.as_deref(), Some("Noted."));
        assert_eq!(rule.effect, EffectSpec::NavigateSearch);
        assert!(rule.ends_flow);
    }
}
