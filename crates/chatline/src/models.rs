//! These models represent the objects passed through a single chat request
//!
//! There are two formats we interact with:
//! - chatline messages, created per request by the server and per reply by an invoker
//! - completion API input items, sent from the invoker to the LLM
//!
//! Incoming text is wrapped into the internal structs immediately, and converted to the
//! completion API's role/content shape only at the boundary (see `providers::utils`).
pub mod conversation;
pub mod message;
pub mod role;
