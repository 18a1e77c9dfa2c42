//! CLI command definitions and handlers

use clap::Subcommand;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Read;
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::core::client::LibreTranslateClient;
use crate::core::config::ClientConfig;
use crate::core::models::{DetectedLanguage, Language};

/// Commands for the LibreTranslate CLI
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate text
    Translate {
        /// Text to translate (read from stdin if omitted)
        text: Option<String>,

        /// Source language (use "auto" to let the server detect it)
        #[arg(short, long, default_value = "en")]
        source: String,

        /// Target language
        #[arg(short, long, default_value = "es")]
        target: String,
    },

    /// Detect the language of text
    Detect {
        /// Text to inspect (read from stdin if omitted)
        text: Option<String>,
    },

    /// List languages supported by the server
    Languages,
}

/// Build the client configuration: flags override the file, the file replaces the environment
pub fn resolve_config(
    config_file: Option<&Path>,
    url: Option<String>,
    api_key: Option<String>,
    timeout_ms: Option<u64>,
) -> anyhow::Result<ClientConfig> {
    let mut config = match config_file {
        Some(path) => ClientConfig::from_file(path)?,
        None => ClientConfig::from_env()?,
    };

    if let Some(url) = url {
        config.base_url = url;
    }
    if let Some(api_key) = api_key {
        config.api_key = Some(api_key);
    }
    if let Some(timeout_ms) = timeout_ms {
        config.timeout_ms = Some(timeout_ms);
    }

    Ok(config)
}

/// Handle translate command
pub async fn handle_translate(
    client: &LibreTranslateClient,
    text: Option<String>,
    source: String,
    target: String,
    json: bool,
) -> anyhow::Result<()> {
    let text = read_text(text, std::io::stdin())?;
    info!("Translating {} chars {} -> {}", text.chars().count(), source, target);

    let pb = spinner("Translating...")?;
    let result = client.translate(&text, &source, &target, None).await;
    pb.finish_and_clear();

    let translated = result?;
    if json {
        println!("{}", serde_json::json!({ "translatedText": translated }));
    } else {
        println!("{}", translated);
    }

    Ok(())
}

/// Handle detect command
pub async fn handle_detect(
    client: &LibreTranslateClient,
    text: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let text = read_text(text, std::io::stdin())?;

    let pb = spinner("Detecting language...")?;
    let result = client.detect_language(&text, None).await;
    pb.finish_and_clear();

    let detected = result?;
    if json {
        println!("{}", serde_json::to_string_pretty(&detected)?);
    } else if detected.is_empty() {
        println!("No language detected");
    } else {
        print!("{}", render_detections(&detected));
    }

    Ok(())
}

/// Handle languages command
pub async fn handle_languages(client: &LibreTranslateClient, json: bool) -> anyhow::Result<()> {
    let pb = spinner("Fetching languages...")?;
    let result = client.list_languages(None).await;
    pb.finish_and_clear();

    let languages = result?;
    info!("Server supports {} languages", languages.len());

    if json {
        println!("{}", serde_json::to_string_pretty(&languages)?);
    } else {
        print!("{}", render_languages(&languages));
    }

    Ok(())
}

/// Use the argument, or fall back to reading all of `input`
fn read_text<R: Read>(text: Option<String>, mut input: R) -> anyhow::Result<String> {
    let text = match text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            input.read_to_string(&mut buf)?;
            buf.trim_end_matches(['\r', '\n']).to_string()
        }
    };

    if text.trim().is_empty() {
        anyhow::bail!("No text given. Pass it as an argument or pipe it on stdin.");
    }

    Ok(text)
}

fn spinner(message: &'static str) -> anyhow::Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    Ok(pb)
}

fn render_detections(detected: &[DetectedLanguage]) -> String {
    detected
        .iter()
        .map(|d| format!("{:<8} {:.2}\n", d.language, d.confidence))
        .collect()
}

fn render_languages(languages: &[Language]) -> String {
    languages.iter().map(|l| format!("{}\n", l)).collect()
}
