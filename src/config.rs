//! Widget configuration provided through Leptos context.
//!
//! `App` provides a `ChatConfig`; components fall back to the default when
//! none is in scope, so a `ChatPanel` can be mounted on its own.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use leptos::prelude::use_context;

/// Path the widget posts chat turns to.
pub const DEFAULT_ENDPOINT: &str = "/chat";

/// Endpoint and UI strings for one chat widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatConfig {
    pub endpoint: String,
    pub title: String,
    pub placeholder: String,
    pub pending_label: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            title: "Security Assistant".to_owned(),
            placeholder: "Type your message...".to_owned(),
            pending_label: "AI is typing...".to_owned(),
        }
    }
}

/// Config from context, or the default when none was provided.
pub fn use_chat_config() -> ChatConfig {
    use_context::<ChatConfig>().unwrap_or_default()
}
