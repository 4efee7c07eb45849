//! # Authflow (find-id and signup client)
//!
//! `authflow` drives the user-facing account flows of the auth API from the
//! client side: looking up whether an email is registered (find-id) and
//! creating an account (signup, signup-complete).
//!
//! ## Flows
//!
//! ### Find ID
//!
//! 1. **Validate:** The email is checked locally; malformed input never reaches the network.
//! 2. **Check:** The client POSTs `{type, value}` to `/api/auth/check/email`.
//! 3. **Display:** A `409` means the email is registered, a `2xx` means it is free.
//!
//! ### Signup
//!
//! 1. **Duplicate checks:** Email and username are checked against
//!    `/api/auth/check/{email,username}` before submit is allowed.
//! 2. **Submit:** The payload (without the confirmation field) is POSTed to `/api/auth/signup`.
//! 3. **Complete:** The completion view redirects after a short, cancellable delay.
//!
//! Controllers publish state snapshots over `tokio::sync::watch`; the `view`
//! module renders those snapshots and holds no business logic. Passwords are
//! kept in `secrecy` wrappers and must never be logged.

pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod errors;
pub mod i18n;
pub mod view;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

pub use errors::AppError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_commit_hash_format() {
        if GIT_COMMIT_HASH == "unknown" {
            // Acceptable in non-git build environments
            return;
        }
        assert!(
            GIT_COMMIT_HASH.chars().all(|c| c.is_ascii_hexdigit()),
            "GIT_COMMIT_HASH should be a hex string, got: {GIT_COMMIT_HASH}"
        );
    }

    #[test]
    fn test_app_user_agent_format() {
        assert!(APP_USER_AGENT.starts_with(env!("CARGO_PKG_NAME")));
        assert!(APP_USER_AGENT.contains(env!("CARGO_PKG_VERSION")));
    }
}
