use super::role::Role;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
/// One turn of a conversation, tagged by where it came from
pub enum Message {
    User { content: String },
    Agent { content: String },
    /// A turn of a kind chatline does not model, such as a system or tool message.
    /// It is sent to the completion API with the user role.
    Other { kind: String, content: String },
}

impl Message {
    /// Create a new user message
    pub fn user<S: Into<String>>(content: S) -> Self {
        Message::User {
            content: content.into(),
        }
    }

    /// Create a new agent (assistant) message
    pub fn agent<S: Into<String>>(content: S) -> Self {
        Message::Agent {
            content: content.into(),
        }
    }

    pub fn other<K: Into<String>, S: Into<String>>(kind: K, content: S) -> Self {
        Message::Other {
            kind: kind.into(),
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        match self {
            Message::User { content } | Message::Agent { content } => content,
            Message::Other { content, .. } => content,
        }
    }

    /// The completion API role for this message; anything not agent-originated is a user turn
    pub fn role(&self) -> Role {
        match self {
            Message::Agent { .. } => Role::Assistant,
            Message::User { .. } | Message::Other { .. } => Role::User,
        }
    }

    pub fn is_user(&self) -> bool {
        matches!(self, Message::User { .. })
    }

    pub fn is_agent(&self) -> bool {
        matches!(self, Message::Agent { .. })
    }
}
