use super::*;
use crate::net::types::ChatReply;

// =============================================================
// Helpers
// =============================================================

fn reply(response: &str, conversation_id: &str) -> ChatOutcome {
    ChatOutcome::Reply(ChatReply {
        response: response.to_owned(),
        conversation_id: ConversationId(serde_json::json!(conversation_id)),
    })
}

fn texts(state: &ChatState) -> Vec<(Role, &str)> {
    state.messages().iter().map(|m| (m.role, m.text.as_str())).collect()
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn chat_state_default_is_idle_and_empty() {
    let state = ChatState::default();
    assert!(state.messages().is_empty());
    assert!(!state.pending());
    assert!(state.conversation_id().is_none());
}

// =============================================================
// submit
// =============================================================

#[test]
fn submit_empty_input_is_ignored() {
    let mut state = ChatState::default();
    assert!(state.submit("").is_none());
    assert!(state.submit("   \n\t").is_none());
    assert!(state.messages().is_empty());
    assert!(!state.pending());
}

#[test]
fn submit_echoes_trimmed_user_text_before_any_reply() {
    let mut state = ChatState::default();
    let request = state.submit("  hello there  ").unwrap();

    assert_eq!(request.message, "hello there");
    assert_eq!(texts(&state), vec![(Role::User, "hello there")]);
    assert!(state.pending());
}

#[test]
fn first_turn_request_has_no_conversation_id() {
    let mut state = ChatState::default();
    let request = state.submit("hi").unwrap();
    assert!(request.conversation_id.is_none());
}

#[test]
fn submit_while_pending_is_ignored() {
    let mut state = ChatState::default();
    state.submit("first").unwrap();

    assert!(state.submit("second").is_none());
    assert_eq!(state.messages().len(), 1);
    assert!(state.pending());
}

// =============================================================
// settle
// =============================================================

#[test]
fn reply_appends_ai_entry_and_stores_conversation_id() {
    let mut state = ChatState::default();
    state.submit("hello").unwrap();
    state.settle(reply("Hi", "abc"));

    assert_eq!(texts(&state), vec![(Role::User, "hello"), (Role::Ai, "Hi")]);
    assert_eq!(state.conversation_id(), Some(&ConversationId(serde_json::json!("abc"))));
    assert!(!state.pending());
}

#[test]
fn server_error_with_message_is_prefixed() {
    let mut state = ChatState::default();
    state.submit("hello").unwrap();
    state.settle(ChatOutcome::ServerError(Some("rate limited".to_owned())));

    assert_eq!(state.messages().len(), 2);
    assert_eq!(texts(&state)[1], (Role::Error, "Error: rate limited"));
    assert!(!state.pending());
}

#[test]
fn server_error_without_message_uses_generic_text() {
    let mut state = ChatState::default();
    state.submit("hello").unwrap();
    state.settle(ChatOutcome::ServerError(None));

    assert_eq!(texts(&state)[1], (Role::Error, "Error: Something went wrong"));
    assert!(!state.pending());
}

#[test]
fn unreachable_uses_connect_text() {
    let mut state = ChatState::default();
    state.submit("hello").unwrap();
    state.settle(ChatOutcome::Unreachable);

    assert_eq!(texts(&state)[1], (Role::Error, "Error: Could not connect to the server"));
    assert_ne!(texts(&state)[1].1, "Error: Something went wrong");
    assert!(!state.pending());
}

#[test]
fn errors_keep_previous_conversation_id() {
    let mut state = ChatState::default();
    state.submit("one").unwrap();
    state.settle(reply("ok", "abc"));
    state.submit("two").unwrap();
    state.settle(ChatOutcome::Unreachable);

    assert_eq!(state.conversation_id(), Some(&ConversationId(serde_json::json!("abc"))));
}

#[test]
fn newest_entry_is_last_after_every_outcome() {
    for outcome in [reply("Hi", "abc"), ChatOutcome::ServerError(None), ChatOutcome::Unreachable] {
        let mut state = ChatState::default();
        state.submit("hello").unwrap();
        state.settle(outcome);
        let last = state.messages().last().unwrap();
        assert_eq!(last.seq, state.messages().len() - 1);
        assert_ne!(last.role, Role::User);
        assert!(!state.pending());
    }
}

// =============================================================
// Multi-turn
// =============================================================

#[test]
fn second_turn_carries_first_turn_conversation_id() {
    let mut state = ChatState::default();
    state.submit("one").unwrap();
    state.settle(reply("first", "abc"));

    let request = state.submit("two").unwrap();
    assert_eq!(request.conversation_id, Some(ConversationId(serde_json::json!("abc"))));
}

#[test]
fn later_reply_overwrites_conversation_id() {
    let mut state = ChatState::default();
    state.submit("one").unwrap();
    state.settle(reply("first", "abc"));
    state.submit("two").unwrap();
    state.settle(reply("second", "xyz"));

    assert_eq!(state.conversation_id(), Some(&ConversationId(serde_json::json!("xyz"))));
}

#[test]
fn log_sequence_numbers_are_contiguous() {
    let mut state = ChatState::default();
    state.submit("one").unwrap();
    state.settle(reply("first", "abc"));
    state.submit("two").unwrap();
    state.settle(ChatOutcome::ServerError(None));

    let seqs: Vec<usize> = state.messages().iter().map(|m| m.seq).collect();
    assert_eq!(seqs, vec![0, 1, 2, 3]);
}

// =============================================================
// Role
// =============================================================

#[test]
fn role_css_classes_match_bubble_styles() {
    assert_eq!(Role::User.css_class(), "user-message");
    assert_eq!(Role::Ai.css_class(), "ai-message");
    assert_eq!(Role::Error.css_class(), "error-message");
}
