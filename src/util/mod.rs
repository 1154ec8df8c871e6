//! Browser helpers shared by the chat components.
//!
//! SYSTEM CONTEXT
//! ==============
//! DOM access lives here so components and state stay free of `web-sys`.

pub mod scroll;
