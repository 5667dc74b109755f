//! Client for OpenAI-compatible chat completion APIs.
//!
//! The endpoint makes exactly one outbound call per generation request, so
//! the client carries its sampling parameters and timeout and exposes a
//! single `generate` operation.

mod client;
mod dto;

pub use client::OpenAiClient;
pub use dto::{ChatMessage, ChatRequest, ChatResponse, OpenAiError};
