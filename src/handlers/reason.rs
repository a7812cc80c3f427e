//! Reasoning endpoint handler.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::llm::{ChatRequest, Message, Role};
use crate::prompt;
use crate::response;
use crate::server::AppState;

/// Sampling temperature for every completion request.
const TEMPERATURE: f32 = 0.2;

#[derive(Serialize)]
pub struct ReasonResponse {
    reason: String,
}

/// POST /reason
///
/// Forwards the payload to the LLM provider as context for a single-turn
/// completion and returns the first choice's content, trimmed. One attempt,
/// no retries; any upstream failure is a 502.
pub async fn reason(State(state): State<AppState>, body: Bytes) -> Response {
    // Best-effort parse. A malformed body degrades to an empty payload
    // instead of a 4xx; the caller still gets whatever the model makes of it.
    let payload: Value = serde_json::from_slice(&body).unwrap_or_else(|err| {
        warn!(%err, "request body is not valid JSON, continuing with empty payload");
        Value::Object(serde_json::Map::new())
    });

    let instruction = prompt::instruction(&payload, &state.config.default_prompt);
    let content = prompt::build(instruction, &payload);

    let request = ChatRequest {
        model: state.config.model.clone(),
        messages: vec![Message {
            role: Role::User,
            content,
        }],
        temperature: Some(TEMPERATURE),
    };

    let chat_response = match state.llm.chat(request).await {
        Ok(resp) => resp,
        Err(e) => {
            return response::bad_gateway(format!("LLM Service Error: {e}")).into_response();
        }
    };

    if let Some(usage) = &chat_response.usage {
        debug!(
            prompt_tokens = usage.prompt_tokens,
            completion_tokens = usage.completion_tokens,
            "token usage"
        );
    }

    let Some(choice) = chat_response.choices.first() else {
        return response::bad_gateway("empty response").into_response();
    };

    if choice.message.content.is_empty() {
        return response::bad_gateway("No content in response").into_response();
    }

    let reason = choice.message.content.trim();
    info!(%reason, "generated reason");

    (
        StatusCode::OK,
        Json(ReasonResponse {
            reason: reason.to_string(),
        }),
    )
        .into_response()
}
