//! Session state for one chat widget.
//!
//! DESIGN
//! ======
//! The widget's state is an explicit value owned by the enclosing page via
//! an `RwSignal`, never a module-level global, so several widgets can live on
//! one page. All mutation goes through two transitions:
//!
//! - `submit` echoes the user's text and produces the outbound request.
//! - `settle` folds the request's outcome back in and clears `pending`.
//!
//! The message log is append-only; entries are never edited or removed.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::{ChatOutcome, ChatRequest, ConversationId};

/// Prefix applied to every error entry.
pub const ERROR_PREFIX: &str = "Error: ";
/// Shown when the server fails without an `error` message.
pub const GENERIC_SERVER_ERROR: &str = "Something went wrong";
/// Shown when the request never completes or its body is unreadable.
pub const CONNECT_ERROR: &str = "Could not connect to the server";

/// Who a log entry is attributed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Ai,
    Error,
}

impl Role {
    /// Role-specific CSS class for the rendered bubble.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::User => "user-message",
            Self::Ai => "ai-message",
            Self::Error => "error-message",
        }
    }
}

/// A single rendered chat entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEntry {
    /// Position in the log, starting at 0. Used as the render key.
    pub seq: usize,
    pub role: Role,
    pub text: String,
}

/// State for one chat widget.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    conversation_id: Option<ConversationId>,
    messages: Vec<LogEntry>,
    pending: bool,
}

impl ChatState {
    /// Conversation identifier from the latest successful reply.
    pub fn conversation_id(&self) -> Option<&ConversationId> {
        self.conversation_id.as_ref()
    }

    /// Entries in display order.
    pub fn messages(&self) -> &[LogEntry] {
        &self.messages
    }

    /// Whether a request is awaiting its response.
    pub fn pending(&self) -> bool {
        self.pending
    }

    /// Start a turn from raw input text.
    ///
    /// Returns the request to send, or `None` when the trimmed input is
    /// empty or a previous turn is still pending. On `Some`, the user's text
    /// has already been appended to the log.
    pub fn submit(&mut self, input: &str) -> Option<ChatRequest> {
        let message = input.trim();
        if message.is_empty() || self.pending {
            return None;
        }

        self.push(Role::User, message.to_owned());
        self.pending = true;

        Some(ChatRequest {
            message: message.to_owned(),
            conversation_id: self.conversation_id.clone(),
        })
    }

    /// Finish the pending turn with its outcome.
    pub fn settle(&mut self, outcome: ChatOutcome) {
        match outcome {
            ChatOutcome::Reply(reply) => {
                self.conversation_id = Some(reply.conversation_id);
                self.push(Role::Ai, reply.response);
            }
            ChatOutcome::ServerError(message) => {
                let detail = message.as_deref().unwrap_or(GENERIC_SERVER_ERROR);
                self.push(Role::Error, format!("{ERROR_PREFIX}{detail}"));
            }
            ChatOutcome::Unreachable => {
                self.push(Role::Error, format!("{ERROR_PREFIX}{CONNECT_ERROR}"));
            }
        }
        self.pending = false;
    }

    fn push(&mut self, role: Role, text: String) {
        let seq = self.messages.len();
        self.messages.push(LogEntry { seq, role, text });
    }
}
