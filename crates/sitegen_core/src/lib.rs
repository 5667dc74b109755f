//! Core data types for the Sitegen generation endpoint.
//!
//! This crate provides the typed request/response values exchanged with the
//! hosting platform and the generation input/output shapes.

mod event;
mod generation;
mod response;

pub use event::{HttpEvent, HttpEventBuilder, RequestContext};
pub use generation::{GenerationInput, GenerationOutput};
pub use response::HttpResponse;
