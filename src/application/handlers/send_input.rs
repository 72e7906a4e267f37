//! SendInputHandler - Runs one user input through a session's flow.
//!
//! Computes the reply immediately, then waits out the typing delay before
//! delivering it into the transcript. A restart or newer input during the
//! delay supersedes the pending reply, which is then discarded.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use crate::application::registry::SessionRegistry;
use crate::domain::flow::{DeliveryResult, Message, SideEffect};
use crate::domain::foundation::{DomainError, SessionId};

/// Command carrying one user input.
#[derive(Debug, Clone)]
pub struct SendInputCommand {
    pub session_id: SessionId,
    pub input: String,
}

/// What one input produced, after delivery resolved.
#[derive(Debug, Clone)]
pub struct SendInputResult {
    /// Bot messages that made it into the transcript. Empty when the
    /// reply was superseded.
    pub messages: Vec<Message>,

    pub side_effect: Option<SideEffect>,

    pub ended: bool,

    /// True when the reply went stale before delivery.
    pub superseded: bool,
}

/// Handler for user input.
pub struct SendInputHandler {
    registry: Arc<SessionRegistry>,
    typing_delay: Duration,
}

impl SendInputHandler {
    pub fn new(registry: Arc<SessionRegistry>, typing_delay: Duration) -> Self {
        Self {
            registry,
            typing_delay,
        }
    }

    pub async fn handle(&self, cmd: SendInputCommand) -> Result<SendInputResult, DomainError> {
        let turn = self
            .registry
            .modify(&cmd.session_id, |session| session.handle_input(&cmd.input))
            .await?;

        debug!(
            session_id = %cmd.session_id,
            ended = turn.ended,
            "input processed, reply pending"
        );

        if !self.typing_delay.is_zero() {
            tokio::time::sleep(self.typing_delay).await;
        }

        let messages = turn.reply.messages().to_vec();
        let delivery = self
            .registry
            .modify(&cmd.session_id, |session| Ok(session.deliver(turn.reply)))
            .await?;

        match delivery {
            DeliveryResult::Delivered(count) => {
                info!(session_id = %cmd.session_id, messages = count, "reply delivered");
                Ok(SendInputResult {
                    messages,
                    side_effect: turn.side_effect,
                    ended: turn.ended,
                    superseded: false,
                })
            }
            DeliveryResult::Stale => {
                info!(session_id = %cmd.session_id, "reply superseded, discarded");
                Ok(SendInputResult {
                    messages: Vec::new(),
                    side_effect: None,
                    ended: turn.ended,
                    superseded: true,
                })
            }
        }
    }
}
