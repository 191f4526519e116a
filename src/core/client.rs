//! Translation client for the Google Translate v2 REST API

use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

use crate::core::config::TranslatorConfig;
use crate::core::errors::{Result, TranslationError};
use crate::core::models::{supported_language_codes, TranslateRequest};
use crate::core::transport::{build_url, HttpTransport};

/// Path of the translated text in a translate response
const TRANSLATED_TEXT_FIELD: &str = "data.translations[0].translatedText";

/// Path of the language code in a detect response
const DETECTED_LANGUAGE_FIELD: &str = "data.detections[0][0].language";

/// Stateless client; every call is a single GET against one endpoint
#[derive(Debug, Clone)]
pub struct GoogleTranslator {
    transport: HttpTransport,
    config: Arc<TranslatorConfig>,
}

/// Non-empty string at `value`, or a missing-field error naming `field`
fn required_str(value: &Value, field: &str) -> Result<String> {
    value
        .as_str()
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .ok_or_else(|| TranslationError::MissingField {
            field: field.to_string(),
        })
}

impl GoogleTranslator {
    /// Create a new translator
    pub fn new(config: TranslatorConfig) -> Result<Self> {
        config.validate()?;

        if config.test_mode {
            info!("Translator running in test mode");
        }

        Ok(Self {
            transport: HttpTransport::new()?,
            config: Arc::new(config),
        })
    }

    /// Create from environment
    pub fn from_env() -> Result<Self> {
        let config = TranslatorConfig::from_env()?;
        Self::new(config)
    }

    /// Configuration the client was built with
    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// Translate text, returning `data.translations[0].translatedText`
    pub async fn translate(&self, request: &TranslateRequest) -> Result<String> {
        if self.config.test_mode {
            return Ok(request.placeholder());
        }

        let url = build_url(
            &self.config.translate_url,
            &self.config.api_key,
            &request.query_params(),
        )?;

        debug!(
            "Translating {} chars to {}",
            request.text.chars().count(),
            request.target_lang
        );

        let body = self.transport.get_json(url).await?;
        required_str(
            &body["data"]["translations"][0]["translatedText"],
            TRANSLATED_TEXT_FIELD,
        )
    }

    /// Detect the language of `text`; `None` in test mode
    pub async fn detect(&self, text: &str) -> Result<Option<String>> {
        if self.config.test_mode {
            return Ok(None);
        }

        let url = build_url(
            &self.config.detect_url,
            &self.config.api_key,
            &[("q", text.to_string())],
        )?;

        let body = self.transport.get_json(url).await?;
        let language = required_str(
            &body["data"]["detections"][0][0]["language"],
            DETECTED_LANGUAGE_FIELD,
        )?;

        debug!("Detected language: {}", language);
        Ok(Some(language))
    }

    /// Supported languages body, decoded verbatim; `None` in test mode
    pub async fn languages(&self) -> Result<Option<Value>> {
        if self.config.test_mode {
            return Ok(None);
        }

        let url = build_url(&self.config.languages_url, &self.config.api_key, &[])?;
        let body = self.transport.get_json(url).await?;
        Ok(Some(body))
    }

    /// Language codes from [`GoogleTranslator::languages`]
    pub async fn language_codes(&self) -> Result<Option<Vec<String>>> {
        Ok(self
            .languages()
            .await?
            .map(|body| supported_language_codes(&body)))
    }
}
