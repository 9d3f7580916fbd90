use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::{InvokeError, InvokeResult};
use crate::models::conversation::Conversation;
use crate::models::message::Message;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    pub input_tokens: Option<i32>,
    pub output_tokens: Option<i32>,
    pub total_tokens: Option<i32>,
}

impl Usage {
    pub fn new(
        input_tokens: Option<i32>,
        output_tokens: Option<i32>,
        total_tokens: Option<i32>,
    ) -> Self {
        Self {
            input_tokens,
            output_tokens,
            total_tokens,
        }
    }
}

/// Base trait for the ways a reply can be produced (completion API, placeholder)
#[async_trait]
pub trait Invoker: Send + Sync {
    /// Short name of the invoker, used when logging which mode was selected
    fn name(&self) -> &str;

    /// Generate the reply to the last message of the conversation
    async fn complete(&self, conversation: &Conversation) -> InvokeResult<(Message, Usage)>;

    /// Reply to the conversation, returning it with the reply appended along with the reply text
    async fn invoke(&self, mut conversation: Conversation) -> InvokeResult<(Conversation, String)> {
        if conversation.is_empty() {
            return Err(InvokeError::EmptyConversation);
        }

        let (reply, usage) = self.complete(&conversation).await?;
        tracing::debug!(
            invoker = self.name(),
            input_tokens = ?usage.input_tokens,
            output_tokens = ?usage.output_tokens,
            total_tokens = ?usage.total_tokens,
            "completion finished"
        );

        let text = reply.content().to_string();
        conversation.push(reply);
        Ok((conversation, text))
    }
}
