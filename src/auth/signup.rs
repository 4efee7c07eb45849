//! Signup form controller. It keeps the form fields, the duplicate-check status
//! of email and username, field validation errors and the submit outcome, and
//! publishes every change over a `watch` channel. Password fields stay in
//! `SecretString` and are only exposed when the request body is built.
//!
//! Flow Overview: check email and username for duplicates, validate the whole
//! form locally, then submit. A successful submit returns the next route:
//! `/signup/verify` when the account still needs email verification, otherwise
//! `/signup/complete`.

use crate::{
    auth::{
        client::AuthService,
        redirect::Navigation,
        types::{Availability, AuthResult, CheckStatus, DuplicateKind, SignupData},
        validation::{is_valid_email, validate_signup_data, SignupField, ValidationErrors},
    },
    errors::AppError,
    i18n::Messages,
};
use secrecy::SecretString;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::debug;

pub const VERIFY_ROUTE: &str = "/signup/verify";
pub const COMPLETE_ROUTE: &str = "/signup/complete";

/// Duplicate-check status of a single field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldCheck {
    pub status: CheckStatus,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct SignupState {
    pub data: SignupData,
    pub email_check: FieldCheck,
    pub username_check: FieldCheck,
    pub errors: ValidationErrors,
    pub is_submitting: bool,
    pub result: Option<AuthResult>,
    pub failure: Option<String>,
}

impl SignupState {
    #[must_use]
    pub fn check(&self, kind: DuplicateKind) -> &FieldCheck {
        match kind {
            DuplicateKind::Email => &self.email_check,
            DuplicateKind::Username => &self.username_check,
        }
    }

    fn check_mut(&mut self, kind: DuplicateKind) -> &mut FieldCheck {
        match kind {
            DuplicateKind::Email => &mut self.email_check,
            DuplicateKind::Username => &mut self.username_check,
        }
    }
}

#[derive(Debug)]
pub struct SignupController {
    service: AuthService,
    state: watch::Sender<SignupState>,
    email_revision: AtomicU64,
    username_revision: AtomicU64,
    cancel: CancellationToken,
}

impl SignupController {
    #[must_use]
    pub fn new(service: AuthService) -> Self {
        let (state, _) = watch::channel(SignupState::default());
        Self {
            service,
            state,
            email_revision: AtomicU64::new(0),
            username_revision: AtomicU64::new(0),
            cancel: CancellationToken::new(),
        }
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SignupState> {
        self.state.subscribe()
    }

    #[must_use]
    pub fn state(&self) -> SignupState {
        self.state.borrow().clone()
    }

    /// Root token of this form; the completion view derives its redirect from it.
    #[must_use]
    pub fn cancel_token(&self) -> &CancellationToken {
        &self.cancel
    }

    pub fn set_email(&self, value: impl Into<String>) {
        let value = value.into();
        self.email_revision.fetch_add(1, Ordering::SeqCst);
        self.state.send_modify(|state| {
            state.data.email = value;
            state.email_check = FieldCheck::default();
            state.errors.remove(SignupField::Email);
        });
    }

    pub fn set_username(&self, value: impl Into<String>) {
        let value = value.into();
        self.username_revision.fetch_add(1, Ordering::SeqCst);
        self.state.send_modify(|state| {
            state.data.username = value;
            state.username_check = FieldCheck::default();
            state.errors.remove(SignupField::Username);
        });
    }

    pub fn set_password(&self, value: SecretString) {
        self.state.send_modify(|state| {
            state.data.password = value;
            state.errors.remove(SignupField::Password);
        });
    }

    pub fn set_confirm_password(&self, value: SecretString) {
        self.state.send_modify(|state| {
            state.data.confirm_password = value;
            state.errors.remove(SignupField::ConfirmPassword);
        });
    }

    pub fn set_address(&self, value: impl Into<String>) {
        let value = value.into();
        self.state.send_modify(|state| {
            state.data.address = value;
            state.errors.remove(SignupField::Address);
        });
    }

    pub fn set_detail_address(&self, value: Option<String>) {
        self.state
            .send_modify(|state| state.data.detail_address = value);
    }

    pub fn set_phone(&self, value: Option<String>) {
        self.state.send_modify(|state| state.data.phone = value);
    }

    pub async fn check_email(&self) {
        self.check_field(DuplicateKind::Email).await;
    }

    pub async fn check_username(&self) {
        self.check_field(DuplicateKind::Username).await;
    }

    async fn check_field(&self, kind: DuplicateKind) {
        if self.cancel.is_cancelled() {
            return;
        }

        let messages = self.service.locale().messages();
        let revision = self.revision(kind).load(Ordering::SeqCst);
        let value = {
            let state = self.state.borrow();
            match kind {
                DuplicateKind::Email => state.data.email.trim().to_string(),
                DuplicateKind::Username => state.data.username.trim().to_string(),
            }
        };

        if kind == DuplicateKind::Email && !value.is_empty() && !is_valid_email(&value) {
            self.state.send_modify(|state| {
                *state.check_mut(kind) = FieldCheck {
                    status: CheckStatus::Error,
                    message: messages.invalid_email.to_string(),
                };
            });
            return;
        }

        self.state.send_modify(|state| {
            *state.check_mut(kind) = FieldCheck {
                status: CheckStatus::Checking,
                message: messages.checking.to_string(),
            };
        });

        let outcome = self
            .service
            .check_duplicate(kind, &value, &self.cancel)
            .await;

        if matches!(outcome, Err(AppError::Cancelled)) {
            debug!(kind = kind.as_str(), "duplicate check cancelled");
            return;
        }
        if self.revision(kind).load(Ordering::SeqCst) != revision {
            debug!(kind = kind.as_str(), "duplicate check response is stale");
            return;
        }

        let check = field_check(kind, outcome, messages);
        self.state.send_modify(|state| *state.check_mut(kind) = check);
    }

    /// Validates the form and submits it. Returns where to navigate on success.
    /// Nothing is sent while validation errors remain or while either
    /// duplicate check has not succeeded.
    pub async fn submit(&self) -> Option<Navigation> {
        if self.cancel.is_cancelled() {
            return None;
        }

        let messages = self.service.locale().messages();
        let snapshot = self.state();

        let mut errors = validate_signup_data(&snapshot.data, self.service.locale());
        if errors.is_empty() {
            if snapshot.email_check.status != CheckStatus::Success {
                errors.insert(SignupField::Email, messages.unchecked_email);
            }
            if snapshot.username_check.status != CheckStatus::Success {
                errors.insert(SignupField::Username, messages.unchecked_username);
            }
        }

        if !errors.is_empty() {
            debug!(fields = errors.len(), "signup blocked by validation");
            self.state.send_modify(|state| {
                state.errors = errors;
                state.failure = None;
            });
            return None;
        }

        self.state.send_modify(|state| {
            state.errors = ValidationErrors::new();
            state.failure = None;
            state.result = None;
            state.is_submitting = true;
        });

        let outcome = self.service.signup(&snapshot.data, &self.cancel).await;

        if matches!(outcome, Err(AppError::Cancelled)) {
            debug!("signup cancelled");
            return None;
        }

        let mut navigation = None;
        self.state.send_modify(|state| {
            state.is_submitting = false;
            match outcome {
                Ok(result) if result.success => {
                    state.result = Some(result);
                    navigation = Some(Navigation::to(if result.needs_verification {
                        VERIFY_ROUTE
                    } else {
                        COMPLETE_ROUTE
                    }));
                }
                Ok(result) => {
                    state.result = Some(result);
                    state.failure = Some(messages.signup_failed.to_string());
                }
                Err(err) => state.failure = Some(err.user_message()),
            }
        });

        navigation
    }

    pub fn dispose(&self) {
        self.cancel.cancel();
    }

    fn revision(&self, kind: DuplicateKind) -> &AtomicU64 {
        match kind {
            DuplicateKind::Email => &self.email_revision,
            DuplicateKind::Username => &self.username_revision,
        }
    }
}

impl Drop for SignupController {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// During signup a free value is the success case.
fn field_check(
    kind: DuplicateKind,
    outcome: Result<Availability, AppError>,
    messages: &Messages,
) -> FieldCheck {
    match outcome {
        Ok(Availability::Available) => FieldCheck {
            status: CheckStatus::Success,
            message: match kind {
                DuplicateKind::Email => messages.email_available,
                DuplicateKind::Username => messages.username_available,
            }
            .to_string(),
        },
        Ok(Availability::Taken(message)) => FieldCheck {
            status: CheckStatus::Error,
            message,
        },
        Err(err) => FieldCheck {
            status: CheckStatus::Error,
            message: err.user_message(),
        },
    }
}
