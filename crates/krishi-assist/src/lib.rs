pub mod assistant;
pub mod config;
pub mod error;
pub mod language;
pub mod rules;
pub mod schemes;
pub mod telemetry;

pub use assistant::{ChatAssistant, ChatReply};
pub use error::AppError;
pub use language::{Language, Localized};
pub use schemes::SchemeDirectory;
