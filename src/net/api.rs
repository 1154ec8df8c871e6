//! HTTP transport for chat turns.
//!
//! Client-side (hydrate): one `POST` per submission via `gloo-net`.
//! Server-side (SSR): a stub that reports the endpoint as unreachable, since
//! chat requests are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport and decode failures are `ApiError`s internally and are logged,
//! but callers only ever see a `ChatOutcome`. The body is read as JSON before
//! the status is looked at, so an unreadable body counts as a transport
//! failure whatever the status was.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ChatErrorBody, ChatOutcome, ChatReply, ChatRequest};

/// Failure to complete a request or to read its response.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unreadable response body (status {status}): {reason}")]
    Decode { status: u16, reason: String },
    #[error("not available on server")]
    Unavailable,
}

/// Send one chat turn to `endpoint` and classify the result.
pub async fn send_chat(endpoint: &str, request: &ChatRequest) -> ChatOutcome {
    match post_chat(endpoint, request).await {
        Ok(outcome) => {
            if let ChatOutcome::ServerError(message) = &outcome {
                leptos::logging::warn!("chat endpoint reported error: {message:?}");
            }
            outcome
        }
        Err(e) => {
            leptos::logging::warn!("chat request to {endpoint} failed: {e}");
            ChatOutcome::Unreachable
        }
    }
}

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
async fn post_chat(endpoint: &str, request: &ChatRequest) -> Result<ChatOutcome, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(endpoint)
            .json(request)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        classify(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Map an HTTP status and raw body onto a `ChatOutcome`.
///
/// # Errors
///
/// Returns `ApiError::Decode` when the body is not JSON, or when a 2xx body
/// lacks the reply fields.
pub fn classify(status: u16, body: &str) -> Result<ChatOutcome, ApiError> {
    let decode = |e: serde_json::Error| ApiError::Decode {
        status,
        reason: e.to_string(),
    };

    if (200..300).contains(&status) {
        let reply: ChatReply = serde_json::from_str(body).map_err(decode)?;
        return Ok(ChatOutcome::Reply(reply));
    }

    let value: serde_json::Value = serde_json::from_str(body).map_err(decode)?;
    let error_body = if value.is_object() {
        serde_json::from_value::<ChatErrorBody>(value).unwrap_or_default()
    } else {
        ChatErrorBody::default()
    };
    Ok(ChatOutcome::ServerError(error_body.message()))
}
