//! AI content generation over the OpenAI chat-completions API

pub mod client;
pub mod prompts;

pub use client::{AiError, ContentGenerator};
pub use prompts::Enhancement;
