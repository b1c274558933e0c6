//! Rule-driven chat assistant: canned bilingual replies plus follow-up suggestions.

pub mod router;
mod service;

pub use router::chat_router;
pub use service::{ChatAssistant, ChatReply};
