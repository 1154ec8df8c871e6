//! Wire DTOs for the `/chat` endpoint.
//!
//! DESIGN
//! ======
//! The conversation identifier is opaque to the client. Whatever JSON value
//! the server hands out is stored and echoed back unchanged on the next turn.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Server-assigned token that correlates the turns of one conversation.
///
/// Held as raw JSON so any value the server issues (string, integer, float,
/// integers beyond `i64`) round-trips byte-for-byte.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationId(pub serde_json::Value);

/// Body of `POST /chat`.
///
/// `conversation_id` is always serialized; it is `null` on the first turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Trimmed user text.
    pub message: String,
    /// Identifier from the previous successful reply, if any.
    pub conversation_id: Option<ConversationId>,
}

/// Successful reply body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    /// Assistant text to render.
    pub response: String,
    /// Identifier to attach to the next request.
    pub conversation_id: ConversationId,
}

/// Body of a non-OK response. Every field is optional.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ChatErrorBody {
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

impl ChatErrorBody {
    /// Server-supplied error text, if the `error` field is truthy.
    ///
    /// Non-empty strings are shown as-is, non-zero numbers and `true` as
    /// their text. Empty strings, zero, `false`, `null`, arrays and objects
    /// yield `None` so the generic message is shown instead.
    pub fn message(&self) -> Option<String> {
        match self.error.as_ref()? {
            serde_json::Value::String(text) if !text.is_empty() => Some(text.clone()),
            serde_json::Value::Number(number) => number_text(number),
            serde_json::Value::Bool(true) => Some("true".to_owned()),
            _ => None,
        }
    }
}

fn number_text(number: &serde_json::Number) -> Option<String> {
    if let Some(int) = number.as_i64() {
        return (int != 0).then(|| int.to_string());
    }
    if let Some(uint) = number.as_u64() {
        return Some(uint.to_string());
    }
    number
        .as_f64()
        .filter(|float| *float != 0.0 && !float.is_nan())
        .map(|float| float.to_string())
}

/// Result of one submission, as seen by the session state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatOutcome {
    /// OK response with a readable reply body.
    Reply(ChatReply),
    /// Non-OK response; carries the server's error text when it sent one.
    ServerError(Option<String>),
    /// Request never completed or the body could not be read.
    Unreachable,
}
