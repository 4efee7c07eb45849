//! Local checks run before any request is sent.

use crate::{auth::types::SignupData, i18n::Locale};
use regex::Regex;
use secrecy::ExposeSecret;
use std::collections::BTreeMap;

/// Minimum password length, counted in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Basic email format check: something, `@`, something, a dot, something.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|regex| regex.is_match(email))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SignupField {
    Email,
    Password,
    ConfirmPassword,
    Username,
    Address,
}

impl SignupField {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SignupField::Email => "email",
            SignupField::Password => "password",
            SignupField::ConfirmPassword => "confirmPassword",
            SignupField::Username => "username",
            SignupField::Address => "address",
        }
    }
}

/// Field-keyed validation messages. A missing key means the field is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<SignupField, String>);

impl ValidationErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` for `field` unless the field already has one.
    pub fn insert(&mut self, field: SignupField, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn remove(&mut self, field: SignupField) {
        self.0.remove(&field);
    }

    #[must_use]
    pub fn get(&self, field: SignupField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, field: SignupField) -> bool {
        self.0.contains_key(&field)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Checks required fields, email format, password length and confirmation.
/// Every failing check is collected; an empty result means the payload can be
/// submitted.
#[must_use]
pub fn validate_signup_data(data: &SignupData, locale: Locale) -> ValidationErrors {
    let messages = locale.messages();
    let mut errors = ValidationErrors::new();

    let email = data.email.trim();
    let password = data.password.expose_secret();
    let confirm_password = data.confirm_password.expose_secret();

    if email.is_empty() {
        errors.insert(SignupField::Email, messages.required_email);
    }
    if password.is_empty() {
        errors.insert(SignupField::Password, messages.required_password);
    }
    if confirm_password.is_empty() {
        errors.insert(SignupField::ConfirmPassword, messages.required_confirm_password);
    }
    if data.username.trim().is_empty() {
        errors.insert(SignupField::Username, messages.required_username);
    }
    if data.address.trim().is_empty() {
        errors.insert(SignupField::Address, messages.required_address);
    }

    // first message wins, so a missing field stays "required"
    if !is_valid_email(email) {
        errors.insert(SignupField::Email, messages.invalid_email);
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.insert(SignupField::Password, messages.password_too_short);
    }
    if password != confirm_password {
        errors.insert(SignupField::ConfirmPassword, messages.password_mismatch);
    }

    errors
}
