//! Startup configuration for the storefront shells.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Storefront configuration, merged from file and environment.
///
/// Loaded once at startup; the session never re-reads configuration while
/// running.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Shop title shown in the header. Env: STOREFRONT__SHOP_NAME.
    pub shop_name: String,
    /// Currency symbol prefixed to every displayed price. Env: STOREFRONT__CURRENCY_SYMBOL.
    pub currency_symbol: String,
    /// Optional path to a JSON catalog file. Unset means the built-in catalog.
    /// Env: STOREFRONT__CATALOG_PATH.
    #[serde(default)]
    pub catalog_path: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            shop_name: "Samsung Store".to_string(),
            currency_symbol: "$".to_string(),
            catalog_path: None,
        }
    }
}

impl StoreConfig {
    /// Load config from file and environment. Precedence: env `STOREFRONT_CONFIG`
    /// path > `config/storefront.toml` > defaults, with `STOREFRONT__*` env
    /// variables overriding file values.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path = std::env::var("STOREFRONT_CONFIG")
            .unwrap_or_else(|_| "config/storefront.toml".to_string());
        let builder = config::Config::builder()
            .set_default("shop_name", "Samsung Store")?
            .set_default("currency_symbol", "$")?;

        let path = Path::new(&config_path);
        let builder = if path.exists() {
            builder.add_source(config::File::from(path))
        } else {
            builder
        };

        let built = builder
            .add_source(config::Environment::with_prefix("STOREFRONT").separator("__"))
            .build()?;

        built.try_deserialize()
    }
}
