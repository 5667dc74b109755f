//! Generation input and output shapes.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

fn default_language() -> String {
    "html".to_string()
}

/// Parsed body of a generation request.
///
/// `prompt` is required and must be non-empty; `language` defaults to
/// `html` when omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct GenerationInput {
    /// Natural-language description of the site to generate
    #[serde(default)]
    prompt: String,
    /// Target language tag, echoed back in the response
    #[serde(default = "default_language")]
    language: String,
}

impl GenerationInput {
    /// Whether the prompt carries any content.
    pub fn has_prompt(&self) -> bool {
        !self.prompt.is_empty()
    }
}

/// Successful generation result, serialized as the response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct GenerationOutput {
    /// Generated code with fence markers stripped
    code: String,
    /// Language tag from the request
    language: String,
    /// Prompt from the request
    prompt: String,
}

impl GenerationOutput {
    /// Creates a new generation output.
    pub fn new(
        code: impl Into<String>,
        language: impl Into<String>,
        prompt: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            language: language.into(),
            prompt: prompt.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_defaults_to_html() {
        let input: GenerationInput =
            serde_json::from_str(r#"{"prompt": "a login page"}"#).unwrap();
        assert_eq!(input.language(), "html");
        assert!(input.has_prompt());
    }

    #[test]
    fn test_missing_prompt_is_empty() {
        let input: GenerationInput = serde_json::from_str("{}").unwrap();
        assert!(!input.has_prompt());
    }

    #[test]
    fn test_language_override() {
        let input: GenerationInput =
            serde_json::from_str(r#"{"prompt": "a shop", "language": "react"}"#).unwrap();
        assert_eq!(input.language(), "react");
    }

    #[test]
    fn test_output_serialization() {
        let output = GenerationOutput::new("<div/>", "html", "a page");
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["code"], "<div/>");
        assert_eq!(value["language"], "html");
        assert_eq!(value["prompt"], "a page");
    }
}
