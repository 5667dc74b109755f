//! The request handler: dispatch, validation, generation, error mapping.

use crate::{HandlerConfig, HandlerError, prompt};
use serde_json::json;
use sitegen_core::{GenerationInput, GenerationOutput, HttpEvent, HttpResponse, RequestContext};
use sitegen_models::{ChatMessage, OpenAiClient, OpenAiError, strip_code_fence};
use tracing::{debug, info, instrument, warn};

/// Stateless request handler for the generation endpoint.
///
/// Owns the upstream client (when a key is configured) and maps every
/// request onto exactly one response; no branch leaves the caller without
/// a result.
#[derive(Debug, Clone)]
pub struct Handler {
    config: HandlerConfig,
    client: Option<OpenAiClient>,
}

impl Handler {
    /// Creates a handler from the given configuration.
    ///
    /// A missing API key is not an error here: the client is simply left
    /// unbuilt and each POST answers 503 until the key is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: HandlerConfig) -> Result<Self, OpenAiError> {
        let client = match config.api_key() {
            Some(key) => Some(OpenAiClient::new(
                key.clone(),
                config.model().clone(),
                config.base_url().clone(),
                *config.temperature(),
                *config.max_tokens(),
                *config.timeout_secs(),
            )?),
            None => None,
        };

        Ok(Self { config, client })
    }

    /// Handles one platform event.
    ///
    /// Dispatches on method first: OPTIONS answers the CORS preflight,
    /// POST runs the generation pipeline, anything else is a 405. Body
    /// handling only happens inside the POST branch, so a non-POST
    /// request with a malformed body is still a 405.
    #[instrument(skip(self, event), fields(request_id = %context.request_id(), method = %event.http_method()))]
    pub async fn handle(&self, event: &HttpEvent, context: &RequestContext) -> HttpResponse {
        match event.http_method().as_str() {
            "OPTIONS" => HttpResponse::preflight(),
            "POST" => match self.generate(event).await {
                Ok(output) => match serde_json::to_value(&output) {
                    Ok(body) => HttpResponse::success(body),
                    Err(e) => Self::error_response(&HandlerError::Internal(e.to_string())),
                },
                Err(e) => Self::error_response(&e),
            },
            _ => Self::error_response(&HandlerError::MethodNotAllowed),
        }
    }

    /// Runs the generation pipeline for a POST event.
    ///
    /// Validation failures are detected before the outbound call is
    /// attempted, in the priority order of the error taxonomy.
    async fn generate(&self, event: &HttpEvent) -> Result<GenerationOutput, HandlerError> {
        let input: GenerationInput =
            serde_json::from_str(event.body()).map_err(|_| HandlerError::InvalidJson)?;

        if !input.has_prompt() {
            return Err(HandlerError::MissingPrompt);
        }

        let client = self.client.as_ref().ok_or(HandlerError::MissingApiKey)?;

        debug!(
            language = %input.language(),
            prompt_len = input.prompt().len(),
            "Generating site"
        );

        let messages = vec![
            ChatMessage::system(prompt::SYSTEM_PROMPT),
            ChatMessage::user(prompt::user_message(input.language(), input.prompt())),
        ];

        let raw = client.generate(messages).await?;
        let code = strip_code_fence(&raw);

        info!(
            language = %input.language(),
            code_len = code.len(),
            "Generation complete"
        );

        Ok(GenerationOutput::new(
            code,
            input.language().clone(),
            input.prompt().clone(),
        ))
    }

    /// Maps an error onto its JSON response.
    fn error_response(error: &HandlerError) -> HttpResponse {
        let status = error.status_code();
        warn!(status = status, error = %error, "Request failed");
        HttpResponse::json(status, json!({ "error": error.to_string() }))
    }

    /// Returns the handler configuration.
    pub fn config(&self) -> &HandlerConfig {
        &self.config
    }
}
