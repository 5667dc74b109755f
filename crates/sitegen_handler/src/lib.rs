//! Request handler and HTTP binding for the Sitegen generation endpoint.
//!
//! The handler receives a platform event, validates it, makes one
//! chat-completion call, strips code fences from the result, and maps
//! every failure onto a JSON error response.

mod api;
mod config;
mod error;
mod handler;
mod prompt;

pub use api::{ApiState, create_router};
pub use config::{HandlerConfig, HandlerConfigBuilder};
pub use error::HandlerError;
pub use handler::Handler;
