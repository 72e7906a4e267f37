//! Flow module - Conversational flows and their engine.
//!
//! A flow is a small state machine over [`FlowStep`]s described by a
//! declarative [`FlowConfig`] and interpreted by one generic
//! [`FlowEngine`]. [`FlowSession`] is the aggregate that owns a visitor's
//! transcript and preferences.

pub mod configs;
pub mod engine;
pub mod kind;
pub mod message;
pub mod navigation;
pub mod preferences;
pub mod rules;
pub mod session;
pub mod status;
pub mod step;

pub use engine::{FlowEngine, TransitionOutcome};
pub use kind::FlowKind;
pub use message::{Author, Message};
pub use navigation::{ListingType, NavigationTarget, SideEffect};
pub use preferences::{PreferenceField, PreferenceSet};
pub use rules::{FlowConfig, StepSpec, TransitionRule, LEAD_SUBMITTED_INPUT};
pub use session::{DeferredReply, DeliveryResult, FlowSession, Turn};
pub use status::FlowStatus;
pub use step::FlowStep;
