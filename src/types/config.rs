use crate::Error;
use std::fmt;
use std::time::Duration;

/// Environment variable holding the bearer token.
pub const API_KEY_VAR: &str = "VENICE_API_KEY";

/// Optional environment variable overriding the API base URL.
pub const BASE_URL_VAR: &str = "VENICE_API_BASE_URL";

pub const DEFAULT_BASE_URL: &str = "https://api.venice.ai/api/v1";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Bearer token authenticating the caller to the API.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a token, rejecting empty or whitespace-only values.
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            None
        } else {
            Some(Self(token))
        }
    }

    pub(crate) fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// Settings for a single probe run.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub credential: Credential,
    pub base_url: String,
    pub timeout: Duration,
}

impl ProbeConfig {
    /// Create configuration for the public endpoint.
    pub fn new(credential: Credential) -> Self {
        Self {
            credential,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create configuration from process environment variables.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let credential = lookup(API_KEY_VAR)
            .and_then(Credential::new)
            .ok_or_else(|| Error::MissingCredential(API_KEY_VAR.to_string()))?;

        let mut config = Self::new(credential);
        if let Some(base_url) = lookup(BASE_URL_VAR).filter(|url| !url.trim().is_empty()) {
            config.base_url = base_url;
        }

        Ok(config)
    }

    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}
