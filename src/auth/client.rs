//! Client wrapper for the auth API endpoints. It centralizes request setup so
//! controllers only see `Availability`, `AuthResult` or an `AppError`, and it
//! must never log the signup payload.

use crate::{
    api::ApiClient,
    auth::types::{
        Availability, AuthResult, DuplicateCheckRequest, DuplicateKind, SignupData,
        SignupRequest, SIGNUP_PATH,
    },
    config::AppConfig,
    errors::AppError,
    i18n::Locale,
};
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

/// Status the auth API uses for an email or username that is already taken.
const CONFLICT: u16 = 409;

#[derive(Clone, Debug)]
pub struct AuthService {
    api: ApiClient,
    locale: Locale,
}

impl AuthService {
    /// # Errors
    /// Returns `AppError::Config` if the HTTP client cannot be built.
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        Ok(Self {
            api: ApiClient::new(config)?,
            locale: config.locale,
        })
    }

    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Asks the server whether `value` is free for the given kind.
    /// A blank value fails before any request is sent.
    ///
    /// # Errors
    /// Returns `AppError::Validation` for blank input, and transport or HTTP
    /// errors for anything other than a 2xx or 409 response.
    #[instrument(skip_all, fields(kind = kind.as_str()))]
    pub async fn check_duplicate(
        &self,
        kind: DuplicateKind,
        value: &str,
        cancel: &CancellationToken,
    ) -> Result<Availability, AppError> {
        let messages = self.locale.messages();
        let value = value.trim();
        if value.is_empty() {
            return Err(AppError::Validation(
                messages.empty_duplicate_value.to_string(),
            ));
        }

        let request = DuplicateCheckRequest { kind, value };
        let response = self.api.post_json(kind.path(), &request, cancel).await?;

        if response.is_success() {
            debug!("value is available");
            Ok(Availability::Available)
        } else if response.status == CONFLICT {
            debug!("value is taken");
            Ok(Availability::Taken(
                response.error_message(messages.taken_fallback),
            ))
        } else {
            Err(response.into_error(messages.duplicate_check_failed))
        }
    }

    /// # Errors
    /// See [`AuthService::check_duplicate`].
    pub async fn check_email_duplicate(
        &self,
        email: &str,
        cancel: &CancellationToken,
    ) -> Result<Availability, AppError> {
        self.check_duplicate(DuplicateKind::Email, email, cancel)
            .await
    }

    /// # Errors
    /// See [`AuthService::check_duplicate`].
    pub async fn check_username_duplicate(
        &self,
        username: &str,
        cancel: &CancellationToken,
    ) -> Result<Availability, AppError> {
        self.check_duplicate(DuplicateKind::Username, username, cancel)
            .await
    }

    /// Submits the signup payload. The confirmation field is never sent.
    ///
    /// # Errors
    /// Returns transport errors, `AppError::Http` with the server message or a
    /// fallback, or `AppError::Parse` when the success body is not an `AuthResult`.
    #[instrument(skip_all)]
    pub async fn signup(
        &self,
        data: &SignupData,
        cancel: &CancellationToken,
    ) -> Result<AuthResult, AppError> {
        let request = SignupRequest::from(data);
        let result: AuthResult = self
            .api
            .post_json_response(
                SIGNUP_PATH,
                &request,
                self.locale.messages().signup_failed,
                cancel,
            )
            .await?;

        debug!(
            success = result.success,
            needs_verification = result.needs_verification,
            "signup settled"
        );

        Ok(result)
    }
}
