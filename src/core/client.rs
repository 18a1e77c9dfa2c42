//! Async LibreTranslate client

use reqwest::{header, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::core::config::ClientConfig;
use crate::core::errors::{Result, TranslationError};
use crate::core::models::{DetectedLanguage, ErrorBody, Language, TranslateResponse};

/// Client for a LibreTranslate endpoint
///
/// Configuration is read-only after construction, so one instance can be
/// cloned and shared across tasks freely.
#[derive(Debug, Clone)]
pub struct LibreTranslateClient {
    client: reqwest::Client,
    base_url: Url,
    config: Arc<ClientConfig>,
}

impl LibreTranslateClient {
    /// Create a new client from a configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let base_url = config.normalized_base_url()?;

        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TranslationError::config(format!("cannot build HTTP client: {}", e)))?;

        debug!("LibreTranslate client targeting {}", base_url);

        Ok(Self {
            client,
            base_url,
            config: Arc::new(config),
        })
    }

    /// Create a client for `url` (or the public default) with an optional key
    pub fn with_url(url: Option<String>, api_key: Option<String>) -> Result<Self> {
        let mut config = url.map(ClientConfig::new).unwrap_or_default();
        config.api_key = api_key;
        Self::new(config)
    }

    /// Create from environment
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Effective base URL, always ending in `/`
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Configured API key
    pub fn api_key(&self) -> Option<&str> {
        self.config.api_key.as_deref()
    }

    /// Translate `text` from `source` to `target`
    pub async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
        timeout: Option<Duration>,
    ) -> Result<String> {
        let params = self.with_api_key(vec![("q", text), ("source", source), ("target", target)]);
        let request = self.request(Method::POST, "translate", timeout)?.form(&params);

        let response: TranslateResponse = self.execute(request).await?;
        Ok(response.translated_text)
    }

    /// Detect the language of `text`, best candidates first
    pub async fn detect_language(
        &self,
        text: &str,
        timeout: Option<Duration>,
    ) -> Result<Vec<DetectedLanguage>> {
        let params = self.with_api_key(vec![("q", text)]);
        let request = self.request(Method::POST, "detect", timeout)?.form(&params);

        self.execute(request).await
    }

    /// List the languages supported by the server
    pub async fn list_languages(&self, timeout: Option<Duration>) -> Result<Vec<Language>> {
        let params = self.with_api_key(Vec::new());
        let mut request = self.request(Method::GET, "languages", timeout)?;
        if !params.is_empty() {
            request = request.query(&params);
        }

        self.execute(request).await
    }

    /// Append `api_key` when one is configured
    fn with_api_key<'a>(&'a self, mut params: Vec<(&'static str, &'a str)>) -> Vec<(&'static str, &'a str)> {
        if let Some(api_key) = self.config.api_key.as_deref() {
            params.push(("api_key", api_key));
        }
        params
    }

    /// Start a request against `<base>/<endpoint>`
    fn request(
        &self,
        method: Method,
        endpoint: &str,
        timeout: Option<Duration>,
    ) -> Result<RequestBuilder> {
        let url = self.base_url.join(endpoint).map_err(|e| {
            TranslationError::config(format!("cannot build URL for {}: {}", endpoint, e))
        })?;

        debug!("{} {}", method, url);

        let mut request = self
            .client
            .request(method, url)
            .header(header::ACCEPT, "application/json");

        if let Some(timeout) = timeout.or_else(|| self.config.timeout()) {
            request = request.timeout(timeout);
        }

        Ok(request)
    }

    /// Send the request and decode a JSON body
    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await.map_err(network_error)?;

        let status = response.status();
        let url = response.url().clone();
        let body = response.bytes().await.map_err(network_error)?;

        if !status.is_success() {
            let message = service_message(status, &String::from_utf8_lossy(&body));
            warn!("{} returned {}: {}", url, status.as_u16(), message);
            return Err(TranslationError::ServiceError {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_slice(&body).map_err(|e| TranslationError::DecodeError {
            message: format!("unexpected response from {}: {}", url, e),
        })
    }
}

/// Transport failures are network errors whatever reqwest calls them
fn network_error(err: reqwest::Error) -> TranslationError {
    let message = if err.is_timeout() {
        format!("request timed out: {}", err)
    } else {
        err.to_string()
    };
    TranslationError::NetworkError { message }
}

/// Pull the server's message out of an error body
fn service_message(status: reqwest::StatusCode, body: &str) -> String {
    if let Ok(ErrorBody { error }) = serde_json::from_str::<ErrorBody>(body) {
        return error;
    }

    let body = body.trim();
    if !body.is_empty() {
        return body.to_string();
    }

    status
        .canonical_reason()
        .unwrap_or("unknown error")
        .to_string()
}
