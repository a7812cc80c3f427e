//! LLM provider client for chat completions.

mod error;
mod provider;
mod types;

pub use error::LLMError;
pub use provider::{LLMProvider, OpenAICompatibleProvider};
pub use types::{ChatRequest, ChatResponse, Choice, Message, Role, Usage};
