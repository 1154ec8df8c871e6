//! Chat widget: message log, pending indicator, and input form.

#[cfg(test)]
#[path = "chat_panel_test.rs"]
mod chat_panel_test;

use leptos::prelude::*;

use crate::config::use_chat_config;
use crate::net::types::ChatRequest;
use crate::state::chat::{ChatState, LogEntry};
use crate::util::scroll::scroll_to_bottom;

/// Start a turn from the input box.
///
/// The input is cleared only when the state accepted the text and produced
/// a request; ignored submissions leave it untouched.
pub fn begin_turn(chat: &mut ChatState, input: &mut String) -> Option<ChatRequest> {
    let request = chat.submit(input)?;
    input.clear();
    Some(request)
}

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
fn dispatch_turn(chat: RwSignal<ChatState>, endpoint: String, request: ChatRequest) {
    #[cfg(feature = "hydrate")]
    {
        log::debug!("sending chat turn ({} bytes)", request.message.len());
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::send_chat(&endpoint, &request).await;
            chat.update(|c| c.settle(outcome));
        });
    }
}

/// One chat widget bound to the caller's session state.
///
/// Submitting echoes the text into the log, posts it to the configured
/// endpoint, and renders the reply or error when the request settles. The
/// send button is disabled while a turn is pending.
#[component]
pub fn ChatPanel(chat: RwSignal<ChatState>) -> impl IntoView {
    let config = use_chat_config();
    let endpoint = StoredValue::new(config.endpoint);
    let placeholder = config.placeholder;
    let pending_label = config.pending_label;

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        chat.track();
        scroll_to_bottom(messages_ref);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut text = input.get_untracked();
        let Some(request) = chat.try_update(|c| begin_turn(c, &mut text)).flatten() else {
            return;
        };
        input.set(text);
        dispatch_turn(chat, endpoint.get_value(), request);
    };

    let pending = move || chat.with(ChatState::pending);

    view! {
        <div class="chat-panel">
            <div class="chat-messages" node_ref=messages_ref>
                <For
                    each=move || chat.with(|c| c.messages().to_vec())
                    key=|entry| entry.seq
                    children=move |entry: LogEntry| {
                        let class = format!("message-bubble {}", entry.role.css_class());
                        view! { <div class=class>{entry.text}</div> }
                    }
                />
            </div>
            <Show when=pending>
                <div class="typing-indicator">{pending_label.clone()}</div>
            </Show>
            <form class="chat-form" on:submit=on_submit>
                <input
                    class="chat-form__input"
                    type="text"
                    autocomplete="off"
                    placeholder=placeholder
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                />
                <button class="btn btn--primary chat-form__send" type="submit" disabled=pending>
                    "Send"
                </button>
            </form>
        </div>
    }
}
