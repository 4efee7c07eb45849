//! Client configuration: API base URL, request timeout and message locale.
//! The CLI builds it from arguments with env fallbacks. Configuration values
//! are public; do not store secrets here.

use crate::{errors::AppError, i18n::Locale};
use std::time::Duration;
use url::Url;

/// Default request timeout (milliseconds) applied to every API call.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
    pub timeout: Duration,
    pub locale: Locale,
}

impl AppConfig {
    /// Builds a config for the given API base URL with default timeout and locale.
    ///
    /// # Errors
    /// Returns `AppError::Config` if the URL is empty or not an http(s) URL.
    pub fn new(api_base_url: &str) -> Result<Self, AppError> {
        let api_base_url = normalize_base_url(api_base_url)
            .ok_or_else(|| AppError::Config("API base URL is required.".to_string()))?;

        let parsed = Url::parse(&api_base_url)
            .map_err(|err| AppError::Config(format!("Invalid API base URL: {err}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(AppError::Config(format!(
                "Unsupported API base URL scheme: {}",
                parsed.scheme()
            )));
        }

        Ok(Self {
            api_base_url,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            locale: Locale::default(),
        })
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}

fn normalize_base_url(value: &str) -> Option<String> {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
