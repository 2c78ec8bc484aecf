//! Configuration for the catalog UI.
//!
//! Defaults can be overridden by a JSON block embedded in the host page:
//!
//! ```html
//! <script id="catalog-config" type="application/json">
//!   { "api_base_url": "https://swapi.py4e.com/api", "log_level": "debug" }
//! </script>
//! ```
//!
//! Missing fields keep their defaults.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Element id of the embedded configuration block.
pub const CONFIG_ELEMENT_ID: &str = "catalog-config";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// SWAPI root, without trailing slash.
    pub api_base_url: String,
    /// Portrait host; images are `{image_base_url}/{id}.jpg`.
    pub image_base_url: String,
    /// Records per page reported by the API.
    pub page_size: u32,
    /// Number of page buttons shown at once.
    pub page_window: u32,
    /// localStorage key holding the favorites array.
    pub favorites_key: String,
    /// How long notices stay on screen.
    pub notice_duration_ms: u32,
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://swapi.dev/api".to_string(),
            image_base_url: "https://starwars-visualguide.com/assets/img/characters".to_string(),
            page_size: 10,
            page_window: 3,
            favorites_key: "favorites".to_string(),
            notice_duration_ms: 3000,
            log_level: "info".to_string(),
        }
    }
}

impl CatalogConfig {
    /// Parse and validate a JSON override.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw).map_err(|e| Error::ConfigParse {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read the embedded block from the document, falling back to defaults.
    ///
    /// Runs before logging is initialized, so problems go to the console directly.
    pub fn from_document() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match raw {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw).unwrap_or_else(|e| {
                web_sys::console::error_1(&format!("[CONFIG] {}; using defaults", e).into());
                Self::default()
            }),
            _ => Self::default(),
        }
    }

    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::config_validation("page_size must be at least 1"));
        }
        if self.page_window == 0 {
            return Err(Error::config_validation("page_window must be at least 1"));
        }
        if self.favorites_key.trim().is_empty() {
            return Err(Error::config_validation("favorites_key must not be empty"));
        }
        if self.api_base_url.trim().is_empty() {
            return Err(Error::config_validation("api_base_url must not be empty"));
        }
        self.log_level_filter()?;
        Ok(())
    }

    pub fn log_level_filter(&self) -> Result<LevelFilter> {
        self.log_level.parse().map_err(|_| {
            Error::config_validation(format!("unknown log_level '{}'", self.log_level))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = CatalogConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.page_size, 10);
        assert_eq!(config.page_window, 3);
        assert_eq!(config.favorites_key, "favorites");
        assert_eq!(config.log_level_filter().unwrap(), LevelFilter::Info);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config =
            CatalogConfig::from_json(r#"{ "api_base_url": "http://localhost:8000/api", "log_level": "debug" }"#)
                .unwrap();
        assert_eq!(config.api_base_url, "http://localhost:8000/api");
        assert_eq!(config.log_level_filter().unwrap(), LevelFilter::Debug);
        assert_eq!(config.page_size, 10);
        assert_eq!(config.notice_duration_ms, 3000);
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = CatalogConfig::from_json("{ page_size: 10 ").unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
    }

    #[test]
    fn test_validation_failures() {
        for raw in [
            r#"{ "page_size": 0 }"#,
            r#"{ "page_window": 0 }"#,
            r#"{ "favorites_key": "  " }"#,
            r#"{ "api_base_url": "" }"#,
            r#"{ "log_level": "chatty" }"#,
        ] {
            let err = CatalogConfig::from_json(raw).unwrap_err();
            assert!(matches!(err, Error::ConfigValidation { .. }), "{raw}");
        }
    }
}
