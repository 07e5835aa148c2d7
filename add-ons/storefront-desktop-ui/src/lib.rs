//! storefront-desktop-ui: egui desktop shell for the storefront core.
//!
//! All state changes go through `storefront_core::StoreSession::dispatch`;
//! the shell paints from the session's `ViewSnapshot` and never mutates
//! catalog, cart, or selection directly.

pub mod config;

pub use config::UiConfig;

use storefront_core::{StoreConfig, StoreSession};

/// Builds the startup session: store config (degrading to defaults on a load
/// error) plus the bootstrapped session over it.
pub fn build_session() -> (StoreSession, StoreConfig) {
    let store_config = StoreConfig::load().unwrap_or_else(|e| {
        tracing::warn!(
            target: "storefront::desktop",
            error = %e,
            "store config load failed, using defaults"
        );
        StoreConfig::default()
    });
    let session = StoreSession::bootstrap(&store_config);
    (session, store_config)
}
