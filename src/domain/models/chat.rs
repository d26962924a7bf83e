use serde::{Deserialize, Serialize};

use super::career_profile::lenient_string;
use crate::domain::DomainError;

const ERROR_REPLY_PREFIX: &str = "Sorry, an error occurred: ";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(default, deserialize_with = "lenient_string")]
    message: String,
}

impl ChatMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    reply: String,
}

impl ChatReply {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }

    /// Conversational reply used in place of an answer when the chat flow fails.
    /// The chat endpoint never reports failure through its status code.
    pub fn from_error(err: &DomainError) -> Self {
        Self {
            reply: format!("{ERROR_REPLY_PREFIX}{err}"),
        }
    }

    pub fn reply(&self) -> &str {
        &self.reply
    }
}
