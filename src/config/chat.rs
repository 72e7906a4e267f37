//! Chat behavior configuration

use std::time::Duration;

use serde::Deserialize;

use super::error::ValidationError;

/// Chat behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    /// Cosmetic delay before a bot reply lands, in milliseconds.
    /// Zero disables the delay (tests, local development).
    #[serde(default = "default_typing_delay_ms")]
    pub typing_delay_ms: u64,
}

impl ChatConfig {
    pub fn typing_delay(&self) -> Duration {
        Duration::from_millis(self.typing_delay_ms)
    }

    /// Validate chat configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.typing_delay_ms > 10_000 {
            return Err(ValidationError::TypingDelayTooLarge);
        }
        Ok(())
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            typing_delay_ms: default_typing_delay_ms(),
        }
    }
}

fn default_typing_delay_ms() -> u64 {
    1500
}
