//! Core data models for translation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Format of the text sent for translation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextFormat {
    /// Markup is preserved by the API
    Html,
    /// Plain text
    Text,
}

impl fmt::Display for TextFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextFormat::Html => write!(f, "html"),
            TextFormat::Text => write!(f, "text"),
        }
    }
}

impl FromStr for TextFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(TextFormat::Html),
            "text" => Ok(TextFormat::Text),
            other => Err(format!("unknown format '{}', expected html or text", other)),
        }
    }
}

/// Translation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub target_lang: String,
    /// Left to the API to detect when absent
    pub source_lang: Option<String>,
    pub pretty_print: Option<bool>,
    pub format: Option<TextFormat>,
}

impl TranslateRequest {
    pub fn new(text: impl Into<String>, target_lang: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            target_lang: target_lang.into(),
            source_lang: None,
            pretty_print: None,
            format: None,
        }
    }

    pub fn with_source_lang(mut self, source_lang: impl Into<String>) -> Self {
        self.source_lang = Some(source_lang.into());
        self
    }

    pub fn with_pretty_print(mut self, pretty_print: bool) -> Self {
        self.pretty_print = Some(pretty_print);
        self
    }

    pub fn with_format(mut self, format: TextFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Source language, treating an empty code as absent
    pub fn source(&self) -> Option<&str> {
        self.source_lang.as_deref().filter(|s| !s.is_empty())
    }

    /// Query parameters for the translate endpoint, without the key
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("q", self.text.clone()),
            ("target", self.target_lang.clone()),
        ];

        if let Some(source) = self.source() {
            params.push(("source", source.to_string()));
        }

        if let Some(pretty_print) = self.pretty_print {
            params.push(("prettyprint", pretty_print.to_string()));
        }

        if let Some(format) = self.format {
            params.push(("format", format.to_string()));
        }

        params
    }

    /// Canned result returned in test mode: `(<source> -> <target>) <text>`
    pub fn placeholder(&self) -> String {
        format!(
            "({} -> {}) {}",
            self.source().unwrap_or_default(),
            self.target_lang,
            self.text
        )
    }
}

/// Collect `data.languages[*].language` from a languages response
pub fn supported_language_codes(body: &serde_json::Value) -> Vec<String> {
    body["data"]["languages"]
        .as_array()
        .map(|languages| {
            languages
                .iter()
                .filter_map(|l| l["language"].as_str())
                .map(|s| s.to_string())
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_params() {
        let request = TranslateRequest::new("Hello", "es");
        assert_eq!(
            request.query_params(),
            vec![("q", "Hello".to_string()), ("target", "es".to_string())]
        );
    }

    #[test]
    fn test_all_params() {
        let request = TranslateRequest::new("Hello", "es")
            .with_source_lang("en")
            .with_pretty_print(false)
            .with_format(TextFormat::Text);

        assert_eq!(
            request.query_params(),
            vec![
                ("q", "Hello".to_string()),
                ("target", "es".to_string()),
                ("source", "en".to_string()),
                ("prettyprint", "false".to_string()),
                ("format", "text".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_source_is_omitted() {
        let request = TranslateRequest::new("Hello", "es").with_source_lang("");
        assert!(request.query_params().iter().all(|(k, _)| *k != "source"));
        assert_eq!(request.source(), None);
    }

    #[test]
    fn test_placeholder() {
        let request = TranslateRequest::new("Hello", "fr").with_source_lang("en");
        assert_eq!(request.placeholder(), "(en -> fr) Hello");

        let request = TranslateRequest::new("Hello", "fr");
        assert_eq!(request.placeholder(), "( -> fr) Hello");
    }

    #[test]
    fn test_format_parse() {
        assert_eq!("HTML".parse::<TextFormat>(), Ok(TextFormat::Html));
        assert_eq!("text".parse::<TextFormat>(), Ok(TextFormat::Text));
        assert!("markdown".parse::<TextFormat>().is_err());
    }

    #[test]
    fn test_supported_language_codes() {
        let body = json!({
            "data": {
                "languages": [
                    { "language": "en" },
                    { "language": "es" },
                    { "name": "no code" }
                ]
            }
        });
        assert_eq!(supported_language_codes(&body), vec!["en", "es"]);
        assert!(supported_language_codes(&json!({})).is_empty());
    }
}
