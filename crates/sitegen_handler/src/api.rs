//! HTTP binding: adapts axum requests to platform events.

use crate::Handler;
use axum::{
    Json, Router,
    body::Body,
    extract::{Query, State},
    http::{HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{any, get},
};
use serde_json::json;
use sitegen_core::{HttpEvent, HttpResponse, RequestContext};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{error, instrument};

/// API server state.
#[derive(Clone)]
pub struct ApiState {
    /// Shared request handler.
    pub handler: Arc<Handler>,
}

/// Creates the API router.
///
/// `/generate` accepts any method; method semantics (405, OPTIONS
/// preflight) live in the handler, not the router.
pub fn create_router(handler: Arc<Handler>) -> Router {
    let state = ApiState { handler };

    Router::new()
        .route("/health", get(health_check))
        .route("/generate", any(generate_site))
        .with_state(state)
}

/// Health check endpoint.
#[instrument(skip_all)]
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Adapts the axum request into a platform event, runs the handler, and
/// converts the result back verbatim (status, headers, body).
#[instrument(skip_all, fields(method = %method))]
async fn generate_site(
    State(state): State<ApiState>,
    method: Method,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: String,
) -> Response {
    let header_map: HashMap<String, String> = headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.to_string(), v.to_string()))
        })
        .collect();

    let event = match HttpEvent::builder()
        .http_method(method.as_str())
        .body(body)
        .query_string_parameters(params)
        .headers(header_map)
        .build()
    {
        Ok(event) => event,
        Err(e) => {
            error!(error = %e, "Failed to build event");
            return (StatusCode::INTERNAL_SERVER_ERROR, "").into_response();
        }
    };

    let context = RequestContext::new(uuid::Uuid::new_v4().to_string());
    let response = state.handler.handle(&event, &context).await;
    into_axum(response)
}

/// Converts a platform response into an axum response.
fn into_axum(response: HttpResponse) -> Response {
    let mut builder = axum::http::Response::builder().status(*response.status_code());
    for (name, value) in response.headers() {
        builder = builder.header(name, value);
    }

    builder
        .body(Body::from(response.body().clone()))
        .unwrap_or_else(|e| {
            error!(error = %e, "Failed to build response");
            (StatusCode::INTERNAL_SERVER_ERROR, "").into_response()
        })
}
