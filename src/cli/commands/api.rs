use crate::{
    config::{AppConfig, DEFAULT_TIMEOUT_MS},
    i18n::Locale,
};
use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use std::time::Duration;

pub const ARG_API_BASE_URL: &str = "api-base-url";
pub const ARG_TIMEOUT_MS: &str = "timeout-ms";
pub const ARG_LOCALE: &str = "locale";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_API_BASE_URL)
                .long("api-base-url")
                .help("Base URL of the auth API, example: https://app.example.com")
                .env("AUTHFLOW_API_BASE_URL")
                .global(true),
        )
        .arg(
            Arg::new(ARG_TIMEOUT_MS)
                .long("timeout-ms")
                .help("Request timeout in milliseconds")
                .env("AUTHFLOW_TIMEOUT_MS")
                .default_value(DEFAULT_TIMEOUT_MS.to_string())
                .global(true)
                .value_parser(clap::value_parser!(u64).range(1..)),
        )
        .arg(
            Arg::new(ARG_LOCALE)
                .long("locale")
                .help("Language of user-facing messages: en, ko")
                .env("AUTHFLOW_LOCALE")
                .default_value("en")
                .global(true)
                .value_parser(|value: &str| value.parse::<Locale>()),
        )
}

/// Builds the client configuration from the global API arguments.
///
/// # Errors
/// Returns an error if the base URL is missing or invalid.
pub fn parse(matches: &ArgMatches) -> Result<AppConfig> {
    let base_url = matches
        .get_one::<String>(ARG_API_BASE_URL)
        .context("missing required argument: --api-base-url")?;
    let timeout_ms = matches
        .get_one::<u64>(ARG_TIMEOUT_MS)
        .copied()
        .unwrap_or(DEFAULT_TIMEOUT_MS);
    let locale = matches
        .get_one::<Locale>(ARG_LOCALE)
        .copied()
        .unwrap_or_default();

    let config = AppConfig::new(base_url)
        .context("invalid --api-base-url")?
        .with_timeout(Duration::from_millis(timeout_ms))
        .with_locale(locale);

    Ok(config)
}
