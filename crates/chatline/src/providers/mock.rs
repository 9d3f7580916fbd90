use async_trait::async_trait;
use std::sync::Arc;
use std::sync::Mutex;

use crate::errors::{InvokeError, InvokeResult};
use crate::models::conversation::Conversation;
use crate::models::message::Message;
use crate::providers::base::{Invoker, Usage};

/// A mock invoker that returns pre-configured replies and records what it was asked
pub struct MockInvoker {
    responses: Arc<Mutex<Vec<Message>>>,
    received: Arc<Mutex<Vec<Conversation>>>,
    fail: bool,
}

impl MockInvoker {
    /// Create a new mock invoker with a sequence of replies
    pub fn new(responses: Vec<Message>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses)),
            received: Arc::new(Mutex::new(Vec::new())),
            fail: false,
        }
    }

    /// A mock invoker whose every call fails like an unreachable completion API
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(Vec::new())
        }
    }

    pub fn received(&self) -> Vec<Conversation> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl Invoker for MockInvoker {
    fn name(&self) -> &str {
        "mock"
    }

    async fn complete(&self, conversation: &Conversation) -> InvokeResult<(Message, Usage)> {
        self.received.lock().unwrap().push(conversation.clone());
        if self.fail {
            return Err(InvokeError::Api("mock failure".to_string()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok((Message::agent(""), Usage::default()))
        } else {
            Ok((responses.remove(0), Usage::default()))
        }
    }
}
