//! Conversation engine configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Conversation engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ConversationConfig {
    /// Upper bound on persisting a review at the end of a dialogue, in seconds
    #[serde(default = "default_persist_timeout")]
    pub persist_timeout_secs: u64,
}

impl ConversationConfig {
    pub fn persist_timeout(&self) -> Duration {
        Duration::from_secs(self.persist_timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.persist_timeout_secs == 0 || self.persist_timeout_secs > 60 {
            return Err(ValidationError::InvalidPersistTimeout);
        }
        Ok(())
    }
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self {
            persist_timeout_secs: default_persist_timeout(),
        }
    }
}

fn default_persist_timeout() -> u64 {
    5
}
