//! storefront-terminal-ui: Ratatui TUI shell.
//!
//! Keyboard-driven product browser and cart over storefront-core. State
//! changes go through `StoreSession::dispatch`; drawing happens in main.rs
//! when the app's redraw flag is set.

pub mod app;

pub use app::TerminalApp;
