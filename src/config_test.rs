use super::*;

#[test]
fn default_endpoint_is_chat() {
    assert_eq!(ChatConfig::default().endpoint, "/chat");
}

#[test]
fn default_ui_strings_are_set() {
    let config = ChatConfig::default();
    assert_eq!(config.placeholder, "Type your message...");
    assert_eq!(config.pending_label, "AI is typing...");
    assert!(!config.title.is_empty());
}

#[test]
fn use_chat_config_without_owner_falls_back_to_default() {
    assert_eq!(use_chat_config(), ChatConfig::default());
}
