//! Inbound event types for the hosting platform.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

fn default_method() -> String {
    "GET".to_string()
}

fn default_body() -> String {
    "{}".to_string()
}

/// HTTP-like event delivered by the hosting platform.
///
/// Field names follow the platform wire shape (`httpMethod`,
/// `queryStringParameters`). A missing method defaults to `GET` and a
/// missing body to `{}`, so partial events still route through the
/// normal dispatch branches.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    Getters,
    derive_builder::Builder,
)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct HttpEvent {
    /// Request method (`GET`, `POST`, `OPTIONS`, ...)
    #[serde(default = "default_method")]
    #[builder(default = "default_method()")]
    http_method: String,
    /// Raw request body, JSON-encoded or empty
    #[serde(default = "default_body")]
    #[builder(default = "default_body()")]
    body: String,
    /// Query parameters, if any
    #[serde(default)]
    #[builder(default)]
    query_string_parameters: HashMap<String, String>,
    /// Request headers, if any
    #[serde(default)]
    #[builder(default)]
    headers: HashMap<String, String>,
}

impl HttpEvent {
    /// Returns a builder for constructing an HttpEvent.
    pub fn builder() -> HttpEventBuilder {
        HttpEventBuilder::default()
    }
}

/// Invocation context supplied alongside each event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct RequestContext {
    /// Platform-assigned request identifier, carried for logging
    request_id: String,
}

impl RequestContext {
    /// Creates a new context with the given request id.
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
        }
    }
}
