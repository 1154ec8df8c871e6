//! Networking modules for the chat endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP call and classifies responses; `types` defines the
//! wire schema shared with the server.

pub mod api;
pub mod types;
