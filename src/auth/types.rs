//! Request and response types for the auth API, plus the transient status
//! values controllers expose to the view. Signup payloads carry passwords, so
//! they must never be logged.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

pub const CHECK_EMAIL_PATH: &str = "/api/auth/check/email";
pub const CHECK_USERNAME_PATH: &str = "/api/auth/check/username";
pub const SIGNUP_PATH: &str = "/api/auth/signup";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateKind {
    Email,
    Username,
}

impl DuplicateKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            DuplicateKind::Email => "email",
            DuplicateKind::Username => "username",
        }
    }

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            DuplicateKind::Email => CHECK_EMAIL_PATH,
            DuplicateKind::Username => CHECK_USERNAME_PATH,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DuplicateCheckRequest<'a> {
    #[serde(rename = "type")]
    pub kind: DuplicateKind,
    pub value: &'a str,
}

/// Outcome of a duplicate check that reached the server.
/// Transport and unexpected HTTP failures are reported as `Err(AppError)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Availability {
    Available,
    Taken(String),
}

/// Four-valued UI status driving message styling and control disabling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CheckStatus {
    #[default]
    Empty,
    Checking,
    Success,
    Error,
}

impl CheckStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CheckStatus::Empty => "",
            CheckStatus::Checking => "checking",
            CheckStatus::Success => "success",
            CheckStatus::Error => "error",
        }
    }
}

/// Signup form contents. `confirm_password` is client-only and never leaves
/// the validation step.
#[derive(Clone, Debug, Default)]
pub struct SignupData {
    pub email: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
    pub username: String,
    pub address: String,
    pub phone: Option<String>,
    pub detail_address: Option<String>,
}

/// Wire payload for `/api/auth/signup`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub username: &'a str,
    pub address: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail_address: Option<&'a str>,
}

impl<'a> From<&'a SignupData> for SignupRequest<'a> {
    fn from(data: &'a SignupData) -> Self {
        Self {
            email: data.email.trim(),
            password: data.password.expose_secret(),
            username: data.username.trim(),
            address: data.address.trim(),
            phone: non_blank(data.phone.as_deref()),
            detail_address: non_blank(data.detail_address.as_deref()),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResult {
    pub success: bool,
    pub needs_verification: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> SignupData {
        SignupData {
            email: " user@example.com ".to_string(),
            password: SecretString::from("correct horse".to_string()),
            confirm_password: SecretString::from("correct horse".to_string()),
            username: "user".to_string(),
            address: "1 Main St".to_string(),
            phone: Some("  ".to_string()),
            detail_address: Some("Apt 2".to_string()),
        }
    }

    #[test]
    fn signup_request_omits_confirmation_and_blank_optionals() {
        let data = sample();
        let value = serde_json::to_value(SignupRequest::from(&data)).unwrap();
        assert_eq!(
            value,
            json!({
                "email": "user@example.com",
                "password": "correct horse",
                "username": "user",
                "address": "1 Main St",
                "detailAddress": "Apt 2",
            })
        );
    }

    #[test]
    fn duplicate_check_request_uses_type_key() {
        let request = DuplicateCheckRequest {
            kind: DuplicateKind::Username,
            value: "neo",
        };
        assert_eq!(
            serde_json::to_value(request).unwrap(),
            json!({ "type": "username", "value": "neo" })
        );
    }

    #[test]
    fn auth_result_decodes_camel_case() {
        let result: AuthResult =
            serde_json::from_str(r#"{"success":true,"needsVerification":false}"#).unwrap();
        assert!(result.success);
        assert!(!result.needs_verification);
    }

    #[test]
    fn signup_data_debug_redacts_passwords() {
        let rendered = format!("{:?}", sample());
        assert!(!rendered.contains("correct horse"));
    }

    #[test]
    fn duplicate_kind_paths() {
        assert_eq!(DuplicateKind::Email.path(), "/api/auth/check/email");
        assert_eq!(DuplicateKind::Username.path(), "/api/auth/check/username");
    }
}
