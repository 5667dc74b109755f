//! Error taxonomy for the request handler.

use sitegen_models::OpenAiError;

/// Handler failures, in detection priority order.
///
/// Each variant's Display string is the message wrapped into the JSON
/// error body, and [`HandlerError::status_code`] gives the response
/// status. Upstream non-success statuses are propagated verbatim rather
/// than normalized to 500.
#[derive(Debug, Clone, derive_more::Display)]
pub enum HandlerError {
    /// Request method is neither POST nor OPTIONS
    #[display("Method not allowed")]
    MethodNotAllowed,

    /// Request body is not valid JSON
    #[display("Invalid JSON")]
    InvalidJson,

    /// Prompt field is missing or empty
    #[display("Prompt is required")]
    MissingPrompt,

    /// No API key was configured for the upstream provider
    #[display("OpenAI API key not configured")]
    MissingApiKey,

    /// Upstream returned a non-success status
    #[display("OpenAI API error: {}", message)]
    Upstream {
        /// Upstream HTTP status, propagated to the caller
        status: u16,
        /// Upstream response text
        message: String,
    },

    /// Anything else: network failure, timeout, unexpected response shape
    #[display("{}", _0)]
    Internal(String),
}

impl HandlerError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MethodNotAllowed => 405,
            Self::InvalidJson | Self::MissingPrompt => 400,
            Self::MissingApiKey => 503,
            Self::Upstream { status, .. } => *status,
            Self::Internal(_) => 500,
        }
    }
}

impl From<OpenAiError> for HandlerError {
    fn from(error: OpenAiError) -> Self {
        match error {
            OpenAiError::Api { status, message } => Self::Upstream { status, message },
            other => Self::Internal(other.to_string()),
        }
    }
}

impl std::error::Error for HandlerError {}
