//! Configuration management

use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

use crate::core::errors::{Result, TranslationError};

/// Public instance used when no URL is configured
pub const DEFAULT_URL: &str = "https://translate.terraprint.co/";

/// Configuration for the LibreTranslate client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Root URL of the LibreTranslate server
    pub base_url: String,
    /// Key forwarded as `api_key` on every request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Default request timeout in milliseconds; must be non-zero
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_URL.to_string(),
            api_key: None,
            timeout_ms: None,
        }
    }
}

impl ClientConfig {
    /// Create a configuration for the given endpoint
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the API key sent with every request
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the default request timeout, rounded up to whole milliseconds
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        let millis = timeout.as_nanos().div_ceil(1_000_000);
        self.timeout_ms = Some(u64::try_from(millis).unwrap_or(u64::MAX));
        self
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("LIBRETRANSLATE_URL") {
            config.base_url = url;
        }

        config.api_key = std::env::var("LIBRETRANSLATE_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());

        if let Ok(raw) = std::env::var("LIBRETRANSLATE_TIMEOUT_MS") {
            let timeout_ms = raw.parse::<u64>().map_err(|e| {
                TranslationError::config(format!("invalid LIBRETRANSLATE_TIMEOUT_MS '{}': {}", raw, e))
            })?;
            if timeout_ms == 0 {
                return Err(TranslationError::config(
                    "LIBRETRANSLATE_TIMEOUT_MS must be greater than 0",
                ));
            }
            config.timeout_ms = Some(timeout_ms);
        }

        Ok(config)
    }

    /// Load from a JSON or YAML file, chosen by extension
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            TranslationError::config(format!("cannot read {}: {}", path.display(), e))
        })?;

        let config: Self = if is_yaml(path) {
            serde_yaml::from_str(&content).map_err(|e| {
                TranslationError::config(format!("invalid YAML in {}: {}", path.display(), e))
            })?
        } else {
            serde_json::from_str(&content).map_err(|e| {
                TranslationError::config(format!("invalid JSON in {}: {}", path.display(), e))
            })?
        };

        debug!("Loaded client configuration from {}", path.display());
        Ok(config)
    }

    /// Save configuration to file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = if is_yaml(path) {
            serde_yaml::to_string(self).map_err(|e| TranslationError::config(e.to_string()))?
        } else {
            serde_json::to_string_pretty(self).map_err(|e| TranslationError::config(e.to_string()))?
        };

        std::fs::write(path, content).map_err(|e| {
            TranslationError::config(format!("cannot write {}: {}", path.display(), e))
        })?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.timeout_ms == Some(0) {
            return Err(TranslationError::config("timeout_ms must be greater than 0"));
        }

        self.normalized_base_url().map(|_| ())
    }

    /// Base URL with exactly one trailing separator
    pub fn normalized_base_url(&self) -> Result<Url> {
        let trimmed = self.base_url.trim();
        if trimmed.is_empty() {
            return Err(TranslationError::config("base URL is required"));
        }

        let normalized = format!("{}/", trimmed.trim_end_matches('/'));
        let url = Url::parse(&normalized).map_err(|e| {
            TranslationError::config(format!("invalid base URL '{}': {}", self.base_url, e))
        })?;

        if url.cannot_be_a_base() {
            return Err(TranslationError::config(format!(
                "base URL '{}' cannot carry a path",
                self.base_url
            )));
        }

        Ok(url)
    }

    /// Default timeout applied to calls that do not pass their own
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .map(|ext| {
            let ext = ext.to_string_lossy().to_lowercase();
            ext == "yaml" || ext == "yml"
        })
        .unwrap_or(false)
}
