//! Flow session aggregate.
//!
//! Owns the transcript, preferences, and current step for one visitor's
//! conversation. Bot replies are produced as revision-stamped snapshots so
//! the application layer can delay delivery (a typing indicator) and drop
//! replies that a restart has made obsolete.

use crate::domain::flow::engine::FlowEngine;
use crate::domain::flow::message::Message;
use crate::domain::flow::navigation::SideEffect;
use crate::domain::flow::preferences::PreferenceSet;
use crate::domain::flow::rules::{FlowConfig, InputMatcher, LEAD_SUBMITTED_INPUT};
use crate::domain::flow::status::FlowStatus;
use crate::domain::flow::step::FlowStep;
use crate::domain::foundation::{
    DomainError, ErrorCode, SessionId, StateMachine, Timestamp, ValidationError,
};
use crate::domain::lead::LeadDetails;

/// Bot messages computed for a turn but not yet shown to the user.
///
/// Stamped with the session revision at the time of computation; delivery
/// is refused once the revision has moved on.
#[derive(Debug, Clone)]
pub struct DeferredReply {
    revision: u64,
    messages: Vec<Message>,
}

impl DeferredReply {
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}

/// Whether a deferred reply made it into the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryResult {
    /// Appended the given number of messages.
    Delivered(usize),

    /// The session moved on; the reply was discarded.
    Stale,
}

/// Everything one user input produced.
#[derive(Debug, Clone)]
pub struct Turn {
    pub reply: DeferredReply,
    pub side_effect: Option<SideEffect>,
    pub ended: bool,
}

/// One visitor's conversation with a flow.
#[derive(Debug, Clone)]
pub struct FlowSession {
    id: SessionId,
    config: FlowConfig,
    step: FlowStep,
    status: FlowStatus,
    preferences: PreferenceSet,
    transcript: Vec<Message>,
    lead: Option<LeadDetails>,
    revision: u64,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl FlowSession {
    /// Starts a session: greeting messages followed by the first prompt,
    /// all landing in the transcript immediately.
    pub fn start(config: FlowConfig) -> Result<Self, DomainError> {
        let now = Timestamp::now();
        let mut session = Self {
            id: SessionId::new(),
            step: config.initial_step,
            status: FlowStatus::Active,
            preferences: PreferenceSet::default(),
            transcript: Vec::new(),
            lead: None,
            revision: 0,
            created_at: now,
            updated_at: now,
            config,
        };
        session.greet()?;
        Ok(session)
    }

    /// Handles one user input.
    ///
    /// The user message joins the transcript at once and session state
    /// advances; the bot reply comes back as a [`DeferredReply`] for the
    /// caller to deliver after its typing delay.
    pub fn handle_input(&mut self, input: &str) -> Result<Turn, DomainError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ValidationError::empty_field("input").into());
        }
        // The lead sentinel is reserved for submit_lead.
        if input == LEAD_SUBMITTED_INPUT {
            return Err(ValidationError::invalid_format("input", "reserved input").into());
        }
        self.process(input, true)
    }

    /// Submits lead details through the flow's gate.
    ///
    /// Validation failures leave the session untouched. On success the
    /// details are stored and the flow advances past its lead capture
    /// step as if the form signal had been typed.
    pub fn submit_lead(&mut self, details: LeadDetails) -> Result<Turn, DomainError> {
        self.check_lead_gate(&details)?;
        self.lead = Some(details);
        self.process(LEAD_SUBMITTED_INPUT, false)
    }

    /// Runs the lead gate without mutating the session.
    ///
    /// Lets a caller confirm the submission would be accepted before
    /// committing side effects that are hard to take back.
    pub fn check_lead_gate(&self, details: &LeadDetails) -> Result<(), DomainError> {
        self.ensure_active()?;
        if self.lead.is_some() {
            return Err(DomainError::new(
                ErrorCode::LeadAlreadyCaptured,
                "lead details were already submitted for this session",
            ));
        }
        let accepts_lead = self
            .config
            .step(self.step)
            .map(|spec| {
                spec.rules
                    .iter()
                    .any(|r| r.matcher == InputMatcher::LeadSubmitted)
            })
            .unwrap_or(false);
        if !accepts_lead {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "the flow is not collecting lead details right now",
            ));
        }
        details.validate(&self.config.lead_gate)?;
        Ok(())
    }

    /// Appends a deferred reply to the transcript, unless the session has
    /// been restarted or advanced since the reply was computed.
    pub fn deliver(&mut self, reply: DeferredReply) -> DeliveryResult {
        if reply.revision != self.revision {
            return DeliveryResult::Stale;
        }
        let count = reply.messages.len();
        self.transcript.extend(reply.messages);
        self.updated_at = Timestamp::now();
        DeliveryResult::Delivered(count)
    }

    /// Restarts the conversation with a fresh configuration.
    ///
    /// Preferences, transcript, and any captured lead are cleared; pending
    /// deferred replies become stale.
    pub fn restart(&mut self, config: FlowConfig) -> Result<(), DomainError> {
        self.config = config;
        self.step = self.config.initial_step;
        self.status = FlowStatus::Active;
        self.preferences.reset();
        self.transcript.clear();
        self.lead = None;
        self.revision += 1;
        self.updated_at = Timestamp::now();
        self.greet()
    }

    fn process(&mut self, input: &str, record_user_message: bool) -> Result<Turn, DomainError> {
        self.ensure_active()?;

        if record_user_message {
            self.transcript.push(Message::user(input)?);
        }

        let engine = FlowEngine::new(&self.config);
        let outcome = engine.transition(self.step, input, &self.preferences)?;

        if let Some((field, value)) = outcome.write {
            self.preferences.set(field, value);
        }
        self.step = outcome.next_step;
        if outcome.ends_flow {
            self.status = self.status.transition_to(FlowStatus::Ended)?;
        }
        self.revision += 1;
        self.updated_at = Timestamp::now();

        Ok(Turn {
            reply: DeferredReply {
                revision: self.revision,
                messages: outcome.messages,
            },
            side_effect: outcome.side_effect,
            ended: outcome.ends_flow,
        })
    }

    fn greet(&mut self) -> Result<(), DomainError> {
        let engine = FlowEngine::new(&self.config);
        let greeting = self.config.greeting.clone();
        for (index, text) in greeting.iter().enumerate() {
            let mut message = Message::bot(text)?;
            if index == 0 {
                if let Some(card) = &self.config.property_card {
                    message = message.with_property_card(card.clone());
                }
            }
            self.transcript.push(message);
        }
        let prompt = engine.prompt_message(self.step, &self.preferences)?;
        self.transcript.push(prompt);
        Ok(())
    }

    fn ensure_active(&self) -> Result<(), DomainError> {
        if self.status.accepts_user_input() {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::FlowEnded,
                "this conversation has ended",
            ))
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn kind(&self) -> crate::domain::flow::kind::FlowKind {
        self.config.kind
    }

    pub fn step(&self) -> FlowStep {
        self.step
    }

    pub fn status(&self) -> FlowStatus {
        self.status
    }

    pub fn preferences(&self) -> &PreferenceSet {
        &self.preferences
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn lead(&self) -> Option<&LeadDetails> {
        self.lead.as_ref()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }
}
