//! # devforum-client
//!
//! WASM progressive-enhancement layer for the Dev Forum's server-rendered
//! pages. Replaces the page's hand-written JavaScript glue with a Rust-native
//! module: asynchronous comment submission, a markdown preview toggle, the
//! persisted dark-mode switch, and a handful of small page binders
//! (validation, textarea auto-grow, delete confirmation, nav marking,
//! fade-in reveal).
//!
//! The server remains authoritative for all rendered content; this crate only
//! wires events and displays what the server returns.

pub mod app;
pub mod net;
pub mod render;
pub mod state;
pub mod util;
pub mod widgets;
