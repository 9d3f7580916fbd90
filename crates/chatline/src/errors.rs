use reqwest::StatusCode;
use thiserror::Error;

#[non_exhaustive]
#[derive(Error, Debug)]
pub enum InvokeError {
    #[error("Conversation has no message to respond to")]
    EmptyConversation,

    #[error("No credential configured for the completion API")]
    MissingCredential,

    #[error("Request to completion API failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Completion API returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Completion API error: {0}")]
    Api(String),
}

pub type InvokeResult<T> = Result<T, InvokeError>;
