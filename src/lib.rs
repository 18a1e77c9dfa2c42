//! LibreTranslate client - async Rust bindings for the LibreTranslate HTTP API
//!
//! This library wraps the three LibreTranslate endpoints (translate, detect,
//! languages) behind a small async client, and ships a command-line front end.
//!
//! ```no_run
//! use libretranslate_client::LibreTranslateClient;
//!
//! # async fn run() -> libretranslate_client::Result<()> {
//! let client = LibreTranslateClient::with_url(Some("http://localhost:5000".into()), None)?;
//! let text = client.translate("Hello", "en", "es", None).await?;
//! println!("{}", text);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;

// Re-export key types for convenience
pub use crate::core::{
    client::LibreTranslateClient,
    config::{ClientConfig, DEFAULT_URL},
    errors::{Result, TranslationError},
    models::{DetectedLanguage, Language},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
