//! Message entity for flow transcripts.
//!
//! Messages are immutable records of bot/user exchanges. A bot message
//! may carry option chips (the valid replies for the next step) and a
//! property card for rich rendering.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::PropertyRef;
use crate::domain::foundation::{DomainError, MessageId, Timestamp};

/// Author of a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Author {
    Bot,
    User,
}

/// An immutable message within a flow transcript.
///
/// # Invariants
///
/// - `id` is globally unique
/// - `text` is non-empty (validated at construction)
/// - `created_at` is set at construction and never changes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Unique identifier for this message.
    id: MessageId,

    /// Who authored the message.
    author: Author,

    /// The message copy.
    text: String,

    /// Selectable reply chips offered alongside the message.
    options: Vec<String>,

    /// Optional property snapshot rendered as a card.
    property_card: Option<PropertyRef>,

    /// When the message was created.
    created_at: Timestamp,
}

impl Message {
    /// Creates a new message with the given author and text.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if text is empty
    pub fn new(author: Author, text: impl Into<String>) -> Result<Self, DomainError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(DomainError::validation("text", "Message text cannot be empty"));
        }

        Ok(Self {
            id: MessageId::new(),
            author,
            text,
            options: Vec::new(),
            property_card: None,
            created_at: Timestamp::now(),
        })
    }

    /// Creates a bot message.
    pub fn bot(text: impl Into<String>) -> Result<Self, DomainError> {
        Self::new(Author::Bot, text)
    }

    /// Creates a user message.
    pub fn user(text: impl Into<String>) -> Result<Self, DomainError> {
        Self::new(Author::User, text)
    }

    /// Attaches selectable reply chips.
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Attaches a property card.
    pub fn with_property_card(mut self, card: PropertyRef) -> Self {
        self.property_card = Some(card);
        self
    }

    // === Accessors ===

    pub fn id(&self) -> &MessageId {
        &self.id
    }

    pub fn author(&self) -> Author {
        self.author
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn property_card(&self) -> Option<&PropertyRef> {
        self.property_card.as_ref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn is_from_bot(&self) -> bool {
        self.author == Author::Bot
    }
}
