use async_trait::async_trait;

use super::base::{Invoker, Usage};
use crate::errors::{InvokeError, InvokeResult};
use crate::models::conversation::Conversation;
use crate::models::message::Message;

/// Replies without any network call, echoing the last message back.
/// Used when no completion API credential is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderInvoker;

impl PlaceholderInvoker {
    pub fn reply_text(content: &str) -> String {
        format!(
            "[dummy-agent] I received: {} | This is a placeholder response.",
            content
        )
    }
}

#[async_trait]
impl Invoker for PlaceholderInvoker {
    fn name(&self) -> &str {
        "placeholder"
    }

    async fn complete(&self, conversation: &Conversation) -> InvokeResult<(Message, Usage)> {
        let last = conversation
            .last()
            .ok_or(InvokeError::EmptyConversation)?;

        Ok((
            Message::agent(Self::reply_text(last.content())),
            Usage::default(),
        ))
    }
}
