//! Outbound response types for the hosting platform.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// HTTP-like response returned to the hosting platform.
///
/// Serialized with platform wire names (`statusCode`, `isBase64Encoded`).
/// The base64 flag is only present on the success path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct HttpResponse {
    /// HTTP status code
    status_code: u16,
    /// Response headers
    headers: HashMap<String, String>,
    /// Response body as a string
    body: String,
    /// Whether the body is base64-encoded (success path only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    is_base64_encoded: Option<bool>,
}

fn json_headers() -> HashMap<String, String> {
    HashMap::from([
        (
            "Content-Type".to_string(),
            "application/json".to_string(),
        ),
        ("Access-Control-Allow-Origin".to_string(), "*".to_string()),
    ])
}

impl HttpResponse {
    /// CORS preflight response: 200 with an empty body and the full
    /// preflight header set. Carries no Content-Type.
    pub fn preflight() -> Self {
        Self {
            status_code: 200,
            headers: HashMap::from([
                ("Access-Control-Allow-Origin".to_string(), "*".to_string()),
                (
                    "Access-Control-Allow-Methods".to_string(),
                    "POST, OPTIONS".to_string(),
                ),
                (
                    "Access-Control-Allow-Headers".to_string(),
                    "Content-Type, X-User-Id".to_string(),
                ),
                ("Access-Control-Max-Age".to_string(), "86400".to_string()),
            ]),
            body: String::new(),
            is_base64_encoded: None,
        }
    }

    /// JSON response with CORS headers.
    pub fn json(status_code: u16, body: serde_json::Value) -> Self {
        Self {
            status_code,
            headers: json_headers(),
            body: body.to_string(),
            is_base64_encoded: None,
        }
    }

    /// Successful generation response: 200 with CORS headers and an
    /// explicit `isBase64Encoded: false` flag.
    pub fn success(body: serde_json::Value) -> Self {
        Self {
            status_code: 200,
            headers: json_headers(),
            body: body.to_string(),
            is_base64_encoded: Some(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_preflight_headers() {
        let response = HttpResponse::preflight();
        assert_eq!(*response.status_code(), 200);
        assert!(response.body().is_empty());
        assert!(!response.headers().contains_key("Content-Type"));
        assert_eq!(
            response.headers().get("Access-Control-Allow-Methods"),
            Some(&"POST, OPTIONS".to_string())
        );
        assert_eq!(
            response.headers().get("Access-Control-Max-Age"),
            Some(&"86400".to_string())
        );
    }

    #[test]
    fn test_base64_flag_only_on_success() {
        let error = HttpResponse::json(400, json!({"error": "Invalid JSON"}));
        let serialized = serde_json::to_value(&error).unwrap();
        assert!(serialized.get("isBase64Encoded").is_none());

        let success = HttpResponse::success(json!({"code": "<div/>"}));
        let serialized = serde_json::to_value(&success).unwrap();
        assert_eq!(serialized["isBase64Encoded"], json!(false));
        assert_eq!(serialized["statusCode"], json!(200));
    }

    #[test]
    fn test_json_carries_cors_headers() {
        let response = HttpResponse::json(405, json!({"error": "Method not allowed"}));
        assert_eq!(
            response.headers().get("Access-Control-Allow-Origin"),
            Some(&"*".to_string())
        );
        assert_eq!(
            response.headers().get("Content-Type"),
            Some(&"application/json".to_string())
        );
    }
}
