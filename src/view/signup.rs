use crate::{
    auth::{
        signup::FieldCheck,
        validation::{SignupField, ValidationErrors},
        SignupComplete, SignupState,
    },
    i18n::Locale,
    view::{button, status_alert, Alert, AlertKind},
};
use secrecy::ExposeSecret;

/// Renders the signup form with per-field check results and validation errors.
#[must_use]
pub fn render_signup(state: &SignupState, locale: Locale, color: bool) -> String {
    let messages = locale.messages();
    let data = &state.data;
    let mut lines = vec![messages.signup_title.to_string()];

    push_field(&mut lines, messages.label_email, &data.email);
    push_check(&mut lines, &state.email_check, color);
    push_error(&mut lines, &state.errors, SignupField::Email, color);

    push_field(&mut lines, messages.label_username, &data.username);
    push_check(&mut lines, &state.username_check, color);
    push_error(&mut lines, &state.errors, SignupField::Username, color);

    push_field(
        &mut lines,
        messages.label_password,
        &mask(data.password.expose_secret()),
    );
    push_error(&mut lines, &state.errors, SignupField::Password, color);

    push_field(
        &mut lines,
        messages.label_confirm_password,
        &mask(data.confirm_password.expose_secret()),
    );
    push_error(&mut lines, &state.errors, SignupField::ConfirmPassword, color);

    push_field(&mut lines, messages.label_address, &data.address);
    push_error(&mut lines, &state.errors, SignupField::Address, color);

    if let Some(detail) = &data.detail_address {
        push_field(&mut lines, messages.label_detail_address, detail);
    }
    if let Some(phone) = &data.phone {
        push_field(&mut lines, messages.label_phone, phone);
    }

    let disabled = state.is_submitting.then_some(messages.disabled);
    lines.push(format!("  {}", button(messages.signup_button, disabled)));

    if state.is_submitting {
        lines.push(format!(
            "  {}",
            Alert::new(AlertKind::Info, messages.submitting).render(color)
        ));
    }

    if let Some(failure) = &state.failure {
        lines.push(format!(
            "  {}",
            Alert::new(AlertKind::Error, failure.as_str()).render(color)
        ));
    }

    lines.join("\n")
}

/// Renders the signup-complete view.
#[must_use]
pub fn render_signup_complete(view: &SignupComplete, color: bool) -> String {
    view.messages()
        .into_iter()
        .enumerate()
        .map(|(index, message)| {
            let kind = if index == 0 {
                AlertKind::Success
            } else {
                AlertKind::Info
            };
            Alert::new(kind, message).render(color)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn push_field(lines: &mut Vec<String>, label: &str, value: &str) {
    lines.push(format!("  {label}: {value}"));
}

fn push_check(lines: &mut Vec<String>, check: &FieldCheck, color: bool) {
    if let Some(alert) = status_alert(check.status, &check.message) {
        lines.push(format!("    {}", alert.render(color)));
    }
}

fn push_error(lines: &mut Vec<String>, errors: &ValidationErrors, field: SignupField, color: bool) {
    if let Some(message) = errors.get(field) {
        lines.push(format!(
            "    {}",
            Alert::new(AlertKind::Error, message).render(color)
        ));
    }
}

fn mask(value: &str) -> String {
    "*".repeat(value.chars().count())
}
