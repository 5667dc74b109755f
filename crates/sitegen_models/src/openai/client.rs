//! One-shot client for the chat completions endpoint.

use crate::openai::{ChatMessage, ChatRequest, ChatResponse, OpenAiError};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Client for an OpenAI-compatible chat completions API.
///
/// Holds the sampling parameters alongside the credential so that a
/// generation request reduces to a message list.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAiClient {
    /// Creates a new client.
    ///
    /// The timeout bounds the whole outbound call; exceeding it surfaces
    /// as [`OpenAiError::Http`].
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    #[instrument(skip(api_key), fields(model = %model, url = %base_url))]
    pub fn new(
        api_key: String,
        model: String,
        base_url: String,
        temperature: f32,
        max_tokens: u32,
        timeout_secs: u64,
    ) -> Result<Self, OpenAiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| OpenAiError::Http(format!("Failed to build HTTP client: {}", e)))?;

        debug!(
            model = %model,
            url = %base_url,
            timeout_secs = timeout_secs,
            "Created OpenAI client"
        );

        Ok(Self {
            client,
            api_key,
            model,
            base_url,
            temperature,
            max_tokens,
        })
    }

    /// Sends one chat completion request and returns the generated text.
    ///
    /// # Errors
    ///
    /// Returns [`OpenAiError::Api`] with the upstream status and response
    /// text for non-success statuses, [`OpenAiError::Http`] for network
    /// failures and timeouts, and [`OpenAiError::ResponseParsing`] when
    /// the response body lacks the expected shape.
    #[instrument(skip(self, messages), fields(model = %self.model))]
    pub async fn generate(&self, messages: Vec<ChatMessage>) -> Result<String, OpenAiError> {
        let request = ChatRequest::builder()
            .model(self.model.clone())
            .messages(messages)
            .temperature(Some(self.temperature))
            .max_tokens(Some(self.max_tokens))
            .build()
            .map_err(|e| OpenAiError::Builder(format!("Failed to build request: {}", e)))?;

        debug!(
            model = %self.model,
            message_count = request.messages().len(),
            "Sending request"
        );

        let response = self
            .client
            .post(&self.base_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                OpenAiError::Http(format!("Request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_text, "API error");

            return Err(OpenAiError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            OpenAiError::ResponseParsing(format!("Failed to parse JSON: {}", e))
        })?;

        debug!(choices = chat_response.choices.len(), "Received response");

        chat_response
            .first_content()
            .map(str::to_string)
            .ok_or_else(|| OpenAiError::ResponseParsing("No choices in response".to_string()))
    }

    /// Returns the model name.
    pub fn model_name(&self) -> &str {
        &self.model
    }
}
