//! Routed pages.

pub mod chat;
