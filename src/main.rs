//! Main entry point for Google Translator CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use google_translator::cli::commands::{self, Commands};
use google_translator::{GoogleTranslator, TranslatorConfig};

/// Google Translator - translate, detect and list languages from the command line
#[derive(Parser, Debug)]
#[command(name = "google-translator", version, about, long_about = None)]
struct Args {
    /// API key (optional, defaults to GOOGLE_TRANSLATE_API_KEY env var)
    #[arg(long)]
    api_key: Option<String>,

    /// JSON configuration file (overrides environment variables)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Answer locally without calling the API
    #[arg(long)]
    test_mode: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Resolve configuration: file or environment, then CLI overrides
fn load_config(args: &Args) -> anyhow::Result<TranslatorConfig> {
    let mut config = match &args.config {
        Some(path) => TranslatorConfig::from_file(path)?,
        None if args.api_key.is_some() || args.test_mode => {
            // The key or test mode comes from the command line, so the env key is optional
            TranslatorConfig::from_env().unwrap_or_default()
        }
        None => TranslatorConfig::from_env()?,
    };

    if let Some(api_key) = &args.api_key {
        config.api_key = api_key.clone();
    }

    if args.test_mode {
        config.test_mode = true;
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("google_translator={}", log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let Some(command) = args.command.as_ref() else {
        println!("Please specify a command. Use --help for more information.");
        return Ok(());
    };

    let translator = GoogleTranslator::new(load_config(&args)?)?;

    // Execute command
    match command {
        Commands::Translate {
            text,
            target_lang,
            source_lang,
            pretty_print,
            format,
        } => {
            commands::handle_translate(
                &translator,
                text.clone(),
                target_lang.clone(),
                source_lang.clone(),
                *pretty_print,
                *format,
            )
            .await?;
        }
        Commands::Detect { text } => {
            commands::handle_detect(&translator, text.clone()).await?;
        }
        Commands::Languages { json } => {
            commands::handle_languages(&translator, *json).await?;
        }
    }

    Ok(())
}
