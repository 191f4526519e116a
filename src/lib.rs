//! Google Translator - client for the Google Translate v2 REST API
//!
//! This library translates text, detects languages and lists the languages
//! supported by the API. A test mode answers without any network traffic.

#![forbid(unsafe_code)]

pub mod cli;
pub mod core;

// Re-export key types for convenience
pub use crate::core::{
    client::GoogleTranslator,
    config::TranslatorConfig,
    errors::{Result, TranslationError},
    models::{supported_language_codes, TextFormat, TranslateRequest},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
