//! HTTP request handlers.

mod health;
mod reason;

pub use health::{livez, readyz};
pub use reason::reason;
