//! Analysis service configuration.
//!
//! Defaults target the public OpenAI endpoint. Override via environment
//! variables or the builder-style setters (tests point `base_url` at a
//! mock server).

use std::fmt;

use url::Url;
use zeroize::Zeroizing;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
/// Documents longer than this many characters are truncated before upload.
pub const DEFAULT_MAX_DOCUMENT_CHARS: usize = 12_000;

/// A string that is wiped on drop and never printed by `Debug`.
#[derive(Clone)]
pub struct SecretString(Zeroizing<String>);

impl SecretString {
    pub fn new(value: impl Into<String>) -> Self {
        Self(Zeroizing::new(value.into()))
    }

    pub fn expose(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

/// Configuration for [`crate::AnalysisClient`].
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// API root; `/chat/completions` is appended.
    pub base_url: Url,
    /// Bearer token.
    pub api_key: SecretString,
    pub model: String,
    pub timeout_secs: u64,
    pub max_document_chars: usize,
}

impl AnalysisConfig {
    /// Configuration with defaults for everything but the key.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        let api_key = SecretString::new(api_key);
        if api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        Ok(Self {
            base_url: parse_url("base_url", DEFAULT_BASE_URL)?,
            api_key,
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_document_chars: DEFAULT_MAX_DOCUMENT_CHARS,
        })
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `RTN_ANALYSIS_API_KEY` (required)
    /// - `RTN_ANALYSIS_BASE_URL` (default: `https://api.openai.com/v1`)
    /// - `RTN_ANALYSIS_MODEL` (default: `gpt-4o-mini`)
    /// - `RTN_ANALYSIS_TIMEOUT_SECS` (default: 60)
    pub fn from_env() -> Result<Self, ConfigError> {
        let key = std::env::var("RTN_ANALYSIS_API_KEY").map_err(|_| ConfigError::MissingApiKey)?;
        let mut config = Self::new(key)?;
        if let Ok(raw) = std::env::var("RTN_ANALYSIS_BASE_URL") {
            config.base_url = parse_url("RTN_ANALYSIS_BASE_URL", &raw)?;
        }
        if let Ok(model) = std::env::var("RTN_ANALYSIS_MODEL") {
            config = config.with_model(model);
        }
        if let Some(secs) = std::env::var("RTN_ANALYSIS_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            config = config.with_timeout_secs(secs);
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, raw: &str) -> Result<Self, ConfigError> {
        self.base_url = parse_url("base_url", raw)?;
        Ok(self)
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_max_document_chars(mut self, chars: usize) -> Self {
        self.max_document_chars = chars;
        self
    }

    /// Full URL of the chat-completions endpoint.
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.as_str().trim_end_matches('/'))
    }
}

fn parse_url(source: &str, raw: &str) -> Result<Url, ConfigError> {
    let url =
        Url::parse(raw).map_err(|e| ConfigError::InvalidUrl(source.to_string(), e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::InvalidUrl(
            source.to_string(),
            format!("unsupported scheme {other:?}"),
        )),
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("an analysis API key is required (set RTN_ANALYSIS_API_KEY)")]
    MissingApiKey,
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
}
