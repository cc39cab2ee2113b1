use anyhow::{bail, Context, Result};
use reqwest::Url;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const API_URL_VAR: &str = "CAT_OR_LOAF_API_URL";
pub const TIMEOUT_VAR: &str = "CAT_OR_LOAF_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub request_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source. Empty values
    /// count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = non_empty(lookup(API_URL_VAR)) {
            config.api_base_url = normalize_base_url(&raw)
                .with_context(|| format!("invalid {}: '{}'", API_URL_VAR, raw))?;
        }

        if let Some(raw) = non_empty(lookup(TIMEOUT_VAR)) {
            let secs: u64 = raw
                .parse()
                .with_context(|| format!("invalid {}: '{}'", TIMEOUT_VAR, raw))?;
            if secs == 0 {
                bail!("{} must be greater than zero", TIMEOUT_VAR);
            }
            config.request_timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// The classification endpoint: `POST <base>/`.
    pub fn classify_url(&self) -> String {
        format!("{}/", self.api_base_url)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim_end_matches('/');
    let url = Url::parse(trimmed)?;
    match url.scheme() {
        "http" | "https" => {}
        other => bail!("unsupported scheme '{}'", other),
    }
    if url.host_str().is_none() {
        bail!("missing host");
    }
    Ok(trimmed.to_string())
}
