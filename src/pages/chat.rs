//! Landing page hosting the assistant chat widget.

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;
use crate::config::use_chat_config;
use crate::state::chat::ChatState;

/// Page that owns the chat session for as long as it is mounted.
#[component]
pub fn ChatPage() -> impl IntoView {
    let chat = RwSignal::new(ChatState::default());
    let title = use_chat_config().title;

    view! {
        <main class="chat-page">
            <header class="chat-page__header">
                <h1>{title}</h1>
            </header>
            <ChatPanel chat=chat/>
        </main>
    }
}
