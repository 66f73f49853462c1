//! LLM-backed macro lookup for foods named in free text.
//!
//! Given a food name, the chat model is asked for typical-serving gram
//! estimates of the five tracked macros. The model is treated as untrusted:
//! its reply is parsed leniently and any field it omits or mangles comes
//! back as `None` rather than an error.

pub mod client;
pub mod parse;
pub mod prompt;

pub use client::{ChatClient, MockChatClient, OpenAiChatClient};
pub use parse::{parse_food_macros, FoodMacros};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Chat model is not configured (missing API key)")]
    NotConfigured,

    #[error("Could not reach the chat service at {0}")]
    Connection(String),

    #[error("Chat request timed out after {0}s")]
    Timeout(u64),

    #[error("Chat transport error: {0}")]
    Transport(String),

    #[error("Chat service error: status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Chat model returned an empty completion")]
    EmptyResponse,

    #[error("Could not parse the chat completion: {0}")]
    InvalidJson(String),
}
