//! Reusable UI components.

pub mod chat_panel;
