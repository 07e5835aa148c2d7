//! Desktop shell config: bundled default via include_str!, overridden by a
//! local file if present.

use serde::Deserialize;

/// Bundled default config so the app runs with no external files.
const DEFAULT_UI_CONFIG: &str = include_str!("../assets/ui_config.json");

#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_window_width")]
    pub window_width: f32,
    #[serde(default = "default_window_height")]
    pub window_height: f32,
    /// Width of one product card in the grid.
    #[serde(default = "default_card_width")]
    pub card_width: f32,
    #[serde(default = "default_theme_dark")]
    pub theme_dark: bool,
}

fn default_window_width() -> f32 {
    1100.0
}
fn default_window_height() -> f32 {
    760.0
}
fn default_card_width() -> f32 {
    220.0
}
fn default_theme_dark() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
            card_width: default_card_width(),
            theme_dark: default_theme_dark(),
        }
    }
}

impl UiConfig {
    /// Load config: local file (relative to manifest or current_dir) if present,
    /// else bundled default.
    pub fn load() -> Self {
        let manifest_assets = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets");
        let cwd_assets = std::env::current_dir()
            .ok()
            .map(|p| p.join("add-ons").join("storefront-desktop-ui").join("assets"));

        let path = [manifest_assets, cwd_assets.unwrap_or_default()]
            .into_iter()
            .find(|b| b.join("ui_config.json").exists())
            .map(|b| b.join("ui_config.json"));

        let s = match path {
            Some(p) => std::fs::read_to_string(&p).ok(),
            None => None,
        };
        let s = s.unwrap_or_else(|| DEFAULT_UI_CONFIG.to_string());
        serde_json::from_str(&s).unwrap_or_default()
    }
}
