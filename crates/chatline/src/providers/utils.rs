use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::base::Usage;
use crate::errors::InvokeError;
use crate::models::message::Message;
use crate::models::role::Role;

/// One item of the completion API's `input` list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputMessage {
    pub role: Role,
    pub content: String,
}

/// Convert internal messages to the completion API's input format.
/// Order and length are preserved; every message maps to exactly one item.
pub fn messages_to_openai_input(messages: &[Message]) -> Vec<InputMessage> {
    messages
        .iter()
        .map(|message| {
            if let Message::Other { kind, .. } = message {
                tracing::debug!(kind = %kind, "sending unmodeled message kind as a user turn");
            }
            InputMessage {
                role: message.role(),
                content: message.content().to_string(),
            }
        })
        .collect()
}

/// Wrap the completion API's reply text as an agent message; no text yields empty content
pub fn reply_to_message(text: Option<&str>) -> Message {
    Message::agent(text.unwrap_or_default())
}

/// Extract the reply text from a completion API response body
///
/// A top level `output_text` string is used as is. Otherwise the text of every
/// `output_text` part inside `message` output items is joined in order.
pub fn openai_response_text(response: &Value) -> Option<String> {
    if let Some(text) = response.get("output_text").and_then(Value::as_str) {
        return Some(text.to_string());
    }

    let parts: Vec<&str> = response
        .get("output")
        .and_then(Value::as_array)?
        .iter()
        .filter(|item| item.get("type").and_then(Value::as_str) == Some("message"))
        .filter_map(|item| item.get("content").and_then(Value::as_array))
        .flatten()
        .filter(|part| part.get("type").and_then(Value::as_str) == Some("output_text"))
        .filter_map(|part| part.get("text").and_then(Value::as_str))
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.concat())
    }
}

pub fn openai_response_usage(response: &Value) -> Usage {
    let Some(usage) = response.get("usage") else {
        return Usage::default();
    };

    let read = |field: &str| {
        usage
            .get(field)
            .and_then(Value::as_i64)
            .map(|value| value as i32)
    };

    let input_tokens = read("input_tokens");
    let output_tokens = read("output_tokens");
    let total_tokens = read("total_tokens").or_else(|| match (input_tokens, output_tokens) {
        (Some(input), Some(output)) => Some(input + output),
        _ => None,
    });

    Usage::new(input_tokens, output_tokens, total_tokens)
}

/// A successful status can still carry an `error` object; successful bodies hold `"error": null`
pub fn check_openai_error(response: &Value) -> Option<InvokeError> {
    let error = response.get("error").filter(|error| !error.is_null())?;
    let message = error
        .get("message")
        .and_then(Value::as_str)
        .map(String::from)
        .unwrap_or_else(|| error.to_string());
    Some(InvokeError::Api(message))
}
