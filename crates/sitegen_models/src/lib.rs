//! OpenAI-compatible chat client and output post-processing for Sitegen.

mod fence;
mod openai;

pub use fence::strip_code_fence;
pub use openai::{ChatMessage, ChatRequest, ChatResponse, OpenAiClient, OpenAiError};
