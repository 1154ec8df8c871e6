//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is plain data with explicit transitions, wrapped in `RwSignal`s by
//! the components that own it, so it can be unit-tested without a browser.

pub mod chat;
