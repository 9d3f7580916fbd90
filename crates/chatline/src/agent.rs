use std::sync::Arc;

use crate::errors::InvokeResult;
use crate::models::conversation::Conversation;
use crate::models::message::Message;
use crate::providers::base::Invoker;

/// Agent runs the single step chat pipeline: the incoming text becomes a one message
/// conversation, the invoker replies to it, and the caller gets the reply text back
#[derive(Clone)]
pub struct Agent {
    invoker: Arc<dyn Invoker>,
}

impl Agent {
    pub fn new(invoker: Arc<dyn Invoker>) -> Self {
        Self { invoker }
    }

    pub fn invoker_name(&self) -> &str {
        self.invoker.name()
    }

    pub async fn reply<S: Into<String>>(&self, text: S) -> InvokeResult<String> {
        let conversation = Conversation::new().with_message(Message::user(text));
        let (conversation, _) = self.invoker.invoke(conversation).await?;

        Ok(conversation
            .last()
            .map(|message| message.content().to_string())
            .unwrap_or_default())
    }
}
