//! Configuration management

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::{info, warn};

use crate::core::errors::{Result, TranslationError};

/// Default endpoint for `translate`
pub const DEFAULT_TRANSLATE_URL: &str = "https://www.googleapis.com/language/translate/v2";

/// Default endpoint for `detect`
pub const DEFAULT_DETECT_URL: &str = "https://www.googleapis.com/language/translate/v2/detect";

/// Default endpoint for `languages`
pub const DEFAULT_LANGUAGES_URL: &str =
    "https://www.googleapis.com/language/translate/v2/languages";

/// Configuration for translator
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    pub api_key: String,
    pub translate_url: String,
    pub detect_url: String,
    pub languages_url: String,
    /// When set, no request ever leaves the process
    pub test_mode: bool,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            translate_url: DEFAULT_TRANSLATE_URL.to_string(),
            detect_url: DEFAULT_DETECT_URL.to_string(),
            languages_url: DEFAULT_LANGUAGES_URL.to_string(),
            test_mode: false,
        }
    }
}

impl fmt::Debug for TranslatorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslatorConfig")
            .field("api_key", &"***")
            .field("translate_url", &self.translate_url)
            .field("detect_url", &self.detect_url)
            .field("languages_url", &self.languages_url)
            .field("test_mode", &self.test_mode)
            .finish()
    }
}

/// Interpret an env-style boolean (`1`, `true`, `yes`, `on`)
pub fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

impl TranslatorConfig {
    /// Build a configuration for the public endpoints with the given key
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Configuration that never touches the network
    pub fn test() -> Self {
        Self {
            test_mode: true,
            ..Default::default()
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        let test_mode = std::env::var("TRANSLATOR_TEST_MODE")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        let api_key = match std::env::var("GOOGLE_TRANSLATE_API_KEY") {
            Ok(key) => key,
            Err(_) if test_mode => String::new(),
            Err(_) => {
                return Err(anyhow::anyhow!(
                    "GOOGLE_TRANSLATE_API_KEY environment variable is required"
                ))
            }
        };

        let translate_url = std::env::var("TRANSLATE_URL")
            .unwrap_or_else(|_| DEFAULT_TRANSLATE_URL.to_string());

        let detect_url =
            std::env::var("DETECT_URL").unwrap_or_else(|_| DEFAULT_DETECT_URL.to_string());

        let languages_url = std::env::var("LANGUAGES_URL")
            .unwrap_or_else(|_| DEFAULT_LANGUAGES_URL.to_string());

        if test_mode {
            info!("Test mode enabled, requests will not be sent");
        }

        Ok(Self {
            api_key,
            translate_url,
            detect_url,
            languages_url,
            test_mode,
        })
    }

    /// Load from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            if !self.test_mode {
                return Err(TranslationError::ConfigError {
                    message: "API key is required".to_string(),
                });
            }
            warn!("No API key configured (test mode)");
        }

        for (name, url) in [
            ("translate_url", &self.translate_url),
            ("detect_url", &self.detect_url),
            ("languages_url", &self.languages_url),
        ] {
            reqwest::Url::parse(url).map_err(|e| TranslationError::ConfigError {
                message: format!("{} is not a valid URL ({}): {}", name, url, e),
            })?;
        }

        Ok(())
    }
}
