//! CLI command definitions and handlers

use clap::Subcommand;
use serde_json::Value;
use tracing::info;

use crate::core::client::GoogleTranslator;
use crate::core::models::{supported_language_codes, TextFormat, TranslateRequest};

/// Commands for Google Translator
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate text into another language
    Translate {
        /// Text to translate
        text: String,

        /// Target language code (e.g. es)
        #[arg(short, long)]
        target_lang: String,

        /// Source language (auto-detect if not specified)
        #[arg(long)]
        source_lang: Option<String>,

        /// Ask the API for a human-readable response (true|false)
        #[arg(long)]
        pretty_print: Option<bool>,

        /// Format of the text: html or text
        #[arg(long)]
        format: Option<TextFormat>,
    },

    /// Detect the language of a text
    Detect {
        /// Text to inspect
        text: String,
    },

    /// List supported languages
    Languages {
        /// Print the raw response body instead of language codes
        #[arg(long)]
        json: bool,
    },
}

/// Handle translate command
pub async fn handle_translate(
    translator: &GoogleTranslator,
    text: String,
    target_lang: String,
    source_lang: Option<String>,
    pretty_print: Option<bool>,
    format: Option<TextFormat>,
) -> anyhow::Result<()> {
    let mut request = TranslateRequest::new(text, target_lang);
    if let Some(source_lang) = source_lang {
        request = request.with_source_lang(source_lang);
    }
    if let Some(pretty_print) = pretty_print {
        request = request.with_pretty_print(pretty_print);
    }
    if let Some(format) = format {
        request = request.with_format(format);
    }

    info!("Translating to {}", request.target_lang);

    let translation = translator.translate(&request).await?;
    println!("{}", translation);

    Ok(())
}

/// Handle detect command
pub async fn handle_detect(translator: &GoogleTranslator, text: String) -> anyhow::Result<()> {
    match translator.detect(&text).await? {
        Some(language) => println!("{}", language),
        None => eprintln!("No detection available (test mode)"),
    }

    Ok(())
}

/// Handle languages command
pub async fn handle_languages(translator: &GoogleTranslator, json: bool) -> anyhow::Result<()> {
    match translator.languages().await? {
        Some(body) => println!("{}", render_languages(&body, json)?),
        None => eprintln!("No language list available (test mode)"),
    }

    Ok(())
}

/// Either the pretty-printed body or one code per line
pub fn render_languages(body: &Value, json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(body)?);
    }

    Ok(supported_language_codes(body).join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use serde_json::json;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(subcommand)]
        command: Commands,
    }

    #[test]
    fn test_parse_translate() {
        let cli = TestCli::try_parse_from([
            "t",
            "translate",
            "Hello world",
            "-t",
            "es",
            "--source-lang",
            "en",
            "--pretty-print",
            "false",
            "--format",
            "text",
        ])
        .unwrap();

        match cli.command {
            Commands::Translate {
                text,
                target_lang,
                source_lang,
                pretty_print,
                format,
            } => {
                assert_eq!(text, "Hello world");
                assert_eq!(target_lang, "es");
                assert_eq!(source_lang.as_deref(), Some("en"));
                assert_eq!(pretty_print, Some(false));
                assert_eq!(format, Some(TextFormat::Text));
            }
            other => panic!("Unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_format() {
        let result = TestCli::try_parse_from([
            "t", "translate", "Hi", "-t", "es", "--format", "pdf",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_languages() {
        let cli = TestCli::try_parse_from(["t", "languages", "--json"]).unwrap();
        assert!(matches!(cli.command, Commands::Languages { json: true }));
    }

    #[test]
    fn test_render_languages() {
        let body = json!({"data": {"languages": [{"language": "en"}, {"language": "fr"}]}});
        assert_eq!(render_languages(&body, false).unwrap(), "en\nfr");

        let rendered = render_languages(&body, true).unwrap();
        let reparsed: Value = serde_json::from_str(&rendered).unwrap();
        assert_json_diff::assert_json_eq!(reparsed, body);
    }
}
