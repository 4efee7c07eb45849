//! Command-line argument dispatch.
//!
//! This module turns validated CLI matches into an [`Action`] carrying the
//! client configuration and the subcommand input. Nothing here touches the
//! network.

use crate::{
    auth::{redirect::DEFAULT_REDIRECT_DELAY, SignupData},
    cli::{
        actions::{check, find_id, signup, Action},
        commands::{self, api},
    },
};
use anyhow::{anyhow, Context, Result};
use clap::ArgMatches;
use secrecy::SecretString;
use std::time::Duration;

/// Map validated CLI matches to an action.
///
/// # Errors
/// Returns an error if required arguments are missing or inconsistent.
pub fn handler(matches: &ArgMatches) -> Result<Action> {
    let config = api::parse(matches)?;

    match matches.subcommand() {
        Some((commands::find_id::CMD_FIND_ID, sub)) => {
            let email = required(sub, commands::find_id::ARG_EMAIL)?;
            Ok(Action::FindId(find_id::Args { config, email }))
        }
        Some((commands::check::CMD_CHECK, sub)) => {
            let kind = required(sub, commands::check::ARG_KIND)?;
            let kind = commands::check::parse_kind(&kind)
                .with_context(|| format!("unsupported check kind: {kind}"))?;
            let value = required(sub, commands::check::ARG_VALUE)?;
            Ok(Action::Check(check::Args {
                config,
                kind,
                value,
            }))
        }
        Some((commands::signup::CMD_SIGNUP, sub)) => {
            let data = signup_data(sub)?;
            let redirect_delay = sub
                .get_one::<u64>(commands::signup::ARG_REDIRECT_DELAY_MS)
                .copied()
                .map_or(DEFAULT_REDIRECT_DELAY, Duration::from_millis);
            Ok(Action::Signup(signup::Args {
                config,
                data,
                redirect_delay,
            }))
        }
        Some((name, _)) => Err(anyhow!("unknown subcommand: {name}")),
        None => Err(anyhow!("missing subcommand")),
    }
}

fn signup_data(matches: &ArgMatches) -> Result<SignupData> {
    use commands::signup::{
        ARG_ADDRESS, ARG_CONFIRM_PASSWORD, ARG_DETAIL_ADDRESS, ARG_EMAIL, ARG_PASSWORD, ARG_PHONE,
        ARG_USERNAME,
    };

    Ok(SignupData {
        email: required(matches, ARG_EMAIL)?,
        password: SecretString::from(required(matches, ARG_PASSWORD)?),
        confirm_password: SecretString::from(required(matches, ARG_CONFIRM_PASSWORD)?),
        username: required(matches, ARG_USERNAME)?,
        address: required(matches, ARG_ADDRESS)?,
        phone: matches.get_one::<String>(ARG_PHONE).cloned(),
        detail_address: matches.get_one::<String>(ARG_DETAIL_ADDRESS).cloned(),
    })
}

fn required(matches: &ArgMatches, id: &str) -> Result<String> {
    matches
        .get_one::<String>(id)
        .cloned()
        .with_context(|| format!("missing required argument: --{id}"))
}
