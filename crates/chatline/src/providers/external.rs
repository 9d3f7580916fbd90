use async_trait::async_trait;
use reqwest::Client;
use reqwest::StatusCode;
use serde_json::{json, Value};
use std::time::Duration;

use super::base::{Invoker, Usage};
use super::configs::CompletionConfig;
use super::utils::{
    check_openai_error, messages_to_openai_input, openai_response_text, openai_response_usage,
    reply_to_message,
};
use crate::errors::{InvokeError, InvokeResult};
use crate::models::conversation::Conversation;
use crate::models::message::Message;

/// Produces replies by calling the completion API
pub struct ExternalInvoker {
    client: Client,
    api_key: String,
    model: String,
    host: String,
}

impl ExternalInvoker {
    pub fn new(config: CompletionConfig) -> InvokeResult<Self> {
        let api_key = config
            .credential()
            .ok_or(InvokeError::MissingCredential)?
            .to_string();

        let client = Client::builder()
            .timeout(Duration::from_secs(600))
            .build()?;

        Ok(Self {
            client,
            api_key,
            model: config.model,
            host: config.host,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn post(&self, payload: Value) -> InvokeResult<Value> {
        let url = format!("{}/v1/responses", self.host.trim_end_matches('/'));

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Ok(response.json().await?),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(InvokeError::Status { status, body })
            }
        }
    }
}

#[async_trait]
impl Invoker for ExternalInvoker {
    fn name(&self) -> &str {
        "external"
    }

    async fn complete(&self, conversation: &Conversation) -> InvokeResult<(Message, Usage)> {
        let payload = json!({
            "model": self.model,
            "input": messages_to_openai_input(conversation.messages()),
        });

        let response = self.post(payload).await?;

        if let Some(err) = check_openai_error(&response) {
            return Err(err);
        }

        let text = openai_response_text(&response);
        let usage = openai_response_usage(&response);

        Ok((reply_to_message(text.as_deref()), usage))
    }
}
