//! reasond - an HTTP relay that turns structured JSON payloads into
//! LLM-generated recommendation reasons.

pub mod config;
pub mod handlers;
pub mod llm;
pub mod prompt;
pub mod response;
pub mod server;
