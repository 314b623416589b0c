//! Runtime Configuration
//!
//! Read once at startup from `window.__APP_CONFIG__`, which the deployer
//! defines in `config.js` next to `index.html` (see `config.example.js`).

use serde::Deserialize;
use thiserror::Error;
use tmdb_catalog::{Endpoints, DEFAULT_API_BASE, DEFAULT_IMAGE_BASE, DEFAULT_WATCH_BASE};
use wasm_bindgen::JsValue;

/// Global the deployer assigns the config object to
pub const CONFIG_GLOBAL: &str = "__APP_CONFIG__";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("window.__APP_CONFIG__ is not defined; serve a config.js that sets it")]
    Missing,
    #[error("invalid configuration: {0}")]
    Invalid(String),
    #[error("api_key must not be empty")]
    EmptyApiKey,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    pub api_key: String,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,
    #[serde(default = "default_watch_base_url")]
    pub watch_base_url: String,
    #[serde(default)]
    pub log_level: Option<String>,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_image_base_url() -> String {
    DEFAULT_IMAGE_BASE.to_string()
}

fn default_watch_base_url() -> String {
    DEFAULT_WATCH_BASE.to_string()
}

impl AppConfig {
    /// Load from the browser global
    pub fn load() -> Result<Self, ConfigError> {
        let window = web_sys::window().ok_or(ConfigError::Missing)?;
        let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
            .map_err(|_| ConfigError::Missing)?;
        if value.is_undefined() || value.is_null() {
            return Err(ConfigError::Missing);
        }
        let config: AppConfig = serde_wasm_bindgen::from_value(value)
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        config.validate()
    }

    /// Same shape as the browser global, from JSON text
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AppConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Invalid(e.to_string()))?;
        config.validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(self)
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints::new(self.api_key.trim())
            .with_api_base(self.api_base_url.as_str())
            .with_image_base(self.image_base_url.as_str())
            .with_watch_base(self.watch_base_url.as_str())
    }
}
