//! Find-id form controller. It owns the transient form state, validates the
//! email locally, asks the auth service whether the email is registered and
//! publishes every state change over a `watch` channel for the view.
//!
//! Flow Overview: editing the email resets the status; submitting validates,
//! moves to `Checking`, issues one duplicate check and settles in `Success`
//! (the email is registered) or `Error`. `is_checking` is cleared once the
//! latest request settles, unless the controller was disposed first.

use crate::{
    auth::{
        client::AuthService,
        types::{Availability, CheckStatus},
        validation::is_valid_email,
    },
    errors::AppError,
    i18n::Messages,
};
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};
use tokio::{sync::watch, task::JoinHandle};
use tokio_util::sync::CancellationToken;
use tracing::debug;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FindIdState {
    pub email: String,
    pub is_checking: bool,
    pub status: CheckStatus,
    pub message: String,
}

#[derive(Debug)]
pub struct FindIdController {
    service: AuthService,
    state: watch::Sender<FindIdState>,
    // bumped on every email edit; a response for an older revision is stale
    revision: AtomicU64,
    // bumped for every request sent; only the latest one clears `is_checking`
    submission: AtomicU64,
    cancel: CancellationToken,
}

/// A request accepted by [`FindIdController::begin_submit`].
#[derive(Debug)]
struct PendingCheck {
    email: String,
    revision: u64,
    submission: u64,
}

impl FindIdController {
    #[must_use]
    pub fn new(service: AuthService) -> Self {
        let (state, _) = watch::channel(FindIdState::default());
        Self {
            service,
            state,
            revision: AtomicU64::new(0),
            submission: AtomicU64::new(0),
            cancel: CancellationToken::new(),
        }
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<FindIdState> {
        self.state.subscribe()
    }

    #[must_use]
    pub fn state(&self) -> FindIdState {
        self.state.borrow().clone()
    }

    /// Updates the email and resets the status and message.
    pub fn set_email(&self, value: impl Into<String>) {
        let value = value.into();
        self.revision.fetch_add(1, Ordering::SeqCst);
        self.state.send_modify(|state| {
            state.email = value;
            state.status = CheckStatus::Empty;
            state.message.clear();
        });
    }

    /// Validates the email and, when it is well formed, checks whether it is
    /// registered. Overlapping calls are not prevented here; the view disables
    /// its submit control while `is_checking` is set.
    pub async fn submit(&self) {
        if let Some(pending) = self.begin_submit() {
            self.finish_submit(pending).await;
        }
    }

    /// Runs [`FindIdController::submit`] on the runtime. Local validation and
    /// the move to `Checking` happen before this returns.
    pub fn spawn_submit(self: &Arc<Self>) -> JoinHandle<()> {
        let pending = self.begin_submit();
        let controller = Arc::clone(self);
        tokio::spawn(async move {
            if let Some(pending) = pending {
                controller.finish_submit(pending).await;
            }
        })
    }

    fn begin_submit(&self) -> Option<PendingCheck> {
        if self.cancel.is_cancelled() {
            return None;
        }

        let messages = self.service.locale().messages();
        let email = self.state.borrow().email.trim().to_string();

        if !is_valid_email(&email) {
            self.state.send_modify(|state| {
                state.status = CheckStatus::Error;
                state.message = messages.invalid_email.to_string();
            });
            return None;
        }

        let revision = self.revision.load(Ordering::SeqCst);
        let submission = self.submission.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_modify(|state| {
            state.status = CheckStatus::Checking;
            state.is_checking = true;
            state.message = messages.checking.to_string();
        });

        Some(PendingCheck {
            email,
            revision,
            submission,
        })
    }

    async fn finish_submit(&self, pending: PendingCheck) {
        let messages = self.service.locale().messages();
        let outcome = self
            .service
            .check_email_duplicate(&pending.email, &self.cancel)
            .await;

        if matches!(outcome, Err(AppError::Cancelled)) {
            debug!("find-id check cancelled");
            return;
        }

        let latest = self.submission.load(Ordering::SeqCst) == pending.submission;
        let stale = self.revision.load(Ordering::SeqCst) != pending.revision;
        if stale {
            debug!("find-id response arrived after the email changed");
        }

        self.state.send_modify(|state| {
            if latest {
                state.is_checking = false;
            }
            if !stale && latest {
                let (status, message) = display_outcome(outcome, messages);
                state.status = status;
                state.message = message;
            }
        });
    }

    /// Cancels any in-flight request; later responses never touch the state.
    pub fn dispose(&self) {
        self.cancel.cancel();
    }
}

impl Drop for FindIdController {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// A registered email is the success case of find-id.
fn display_outcome(
    outcome: Result<Availability, AppError>,
    messages: &Messages,
) -> (CheckStatus, String) {
    match outcome {
        Ok(Availability::Taken(_)) => (
            CheckStatus::Success,
            messages.find_id_registered.to_string(),
        ),
        Ok(Availability::Available) => (
            CheckStatus::Error,
            messages.find_id_not_registered.to_string(),
        ),
        Err(err) => (CheckStatus::Error, err.user_message()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::{config::AppConfig, i18n::Locale};
    use serde_json::json;
    use std::{net::TcpListener, time::Duration};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn controller_for(uri: &str, locale: Locale) -> Arc<FindIdController> {
        let config = AppConfig::new(uri).unwrap().with_locale(locale);
        Arc::new(FindIdController::new(AuthService::new(&config).unwrap()))
    }

    async fn mount_check(server: &MockServer, status: u16, delay: Duration) {
        Mock::given(method("POST"))
            .and(path("/api/auth/check/email"))
            .respond_with(
                ResponseTemplate::new(status)
                    .set_body_json(json!({ "error": "already exists" }))
                    .set_delay(delay),
            )
            .mount(server)
            .await;
    }

    #[test]
    fn display_outcome_maps_tri_state() {
        let messages = Locale::En.messages();
        assert_eq!(
            display_outcome(Ok(Availability::Taken("x".to_string())), messages),
            (
                CheckStatus::Success,
                messages.find_id_registered.to_string()
            )
        );
        assert_eq!(
            display_outcome(Ok(Availability::Available), messages),
            (
                CheckStatus::Error,
                messages.find_id_not_registered.to_string()
            )
        );
        assert_eq!(
            display_outcome(
                Err(AppError::Http {
                    status: 500,
                    message: "boom".to_string()
                }),
                messages
            ),
            (CheckStatus::Error, "boom".to_string())
        );
    }

    #[tokio::test]
    async fn set_email_resets_status() {
        let controller = controller_for("http://127.0.0.1:9", Locale::En);
        controller.set_email("bad-email");
        controller.submit().await;
        assert_eq!(controller.state().status, CheckStatus::Error);

        controller.set_email("bad-email2");
        let state = controller.state();
        assert_eq!(state.status, CheckStatus::Empty);
        assert!(state.message.is_empty());
        assert_eq!(state.email, "bad-email2");
    }

    #[tokio::test]
    async fn registered_email_settles_in_success() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        mount_check(&server, 409, Duration::ZERO).await;

        let controller = controller_for(&server.uri(), Locale::Ko);
        controller.set_email("a@b.com");
        controller.submit().await;

        let state = controller.state();
        assert_eq!(state.status, CheckStatus::Success);
        assert_eq!(state.message, Locale::Ko.messages().find_id_registered);
        assert!(!state.is_checking);
    }

    #[tokio::test]
    async fn unregistered_email_settles_in_error() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        mount_check(&server, 200, Duration::ZERO).await;

        let controller = controller_for(&server.uri(), Locale::En);
        controller.set_email("a@b.com");
        controller.submit().await;

        let state = controller.state();
        assert_eq!(state.status, CheckStatus::Error);
        assert_eq!(state.message, Locale::En.messages().find_id_not_registered);
        assert!(!state.is_checking);
    }

    #[tokio::test]
    async fn edit_during_request_discards_the_response() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        mount_check(&server, 409, Duration::from_millis(300)).await;

        let controller = controller_for(&server.uri(), Locale::En);
        let mut updates = controller.subscribe();
        controller.set_email("a@b.com");
        let handle = controller.spawn_submit();

        updates
            .wait_for(|state| state.status == CheckStatus::Checking)
            .await
            .unwrap();
        controller.set_email("c@d.com");
        handle.await.unwrap();

        let state = controller.state();
        assert_eq!(state.status, CheckStatus::Empty);
        assert!(state.message.is_empty());
        assert!(!state.is_checking);
    }

    #[tokio::test]
    async fn spawn_submit_is_checking_on_return() {
        let controller = controller_for("http://127.0.0.1:9", Locale::En);
        controller.set_email("a@b.com");
        let handle = controller.spawn_submit();

        let state = controller.state();
        assert_eq!(state.status, CheckStatus::Checking);
        assert!(state.is_checking);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn older_response_keeps_newer_submit_in_flight() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/check/email"))
            .and(body_json(json!({ "type": "email", "value": "a@b.com" })))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(50)))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/auth/check/email"))
            .and(body_json(json!({ "type": "email", "value": "c@d.com" })))
            .respond_with(
                ResponseTemplate::new(409)
                    .set_body_json(json!({ "error": "already exists" }))
                    .set_delay(Duration::from_millis(500)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let controller = controller_for(&server.uri(), Locale::En);
        controller.set_email("a@b.com");
        let first = controller.spawn_submit();
        controller.set_email("c@d.com");
        let second = controller.spawn_submit();

        first.await.unwrap();
        let state = controller.state();
        assert!(state.is_checking);
        assert_eq!(state.status, CheckStatus::Checking);

        second.await.unwrap();
        let state = controller.state();
        assert!(!state.is_checking);
        assert_eq!(state.status, CheckStatus::Success);
        assert_eq!(state.message, Locale::En.messages().find_id_registered);
    }

    #[tokio::test]
    async fn dispose_cancels_without_touching_state() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        mount_check(&server, 409, Duration::from_secs(5)).await;

        let controller = controller_for(&server.uri(), Locale::En);
        let mut updates = controller.subscribe();
        controller.set_email("a@b.com");
        let handle = controller.spawn_submit();

        updates
            .wait_for(|state| state.status == CheckStatus::Checking)
            .await
            .unwrap();
        controller.dispose();
        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(controller.state().status, CheckStatus::Checking);
    }

    #[tokio::test]
    async fn transport_failure_is_an_error() {
        // port 9 (discard) is closed on test hosts
        let controller = controller_for("http://127.0.0.1:9", Locale::En);
        controller.set_email("a@b.com");
        controller.submit().await;

        let state = controller.state();
        assert_eq!(state.status, CheckStatus::Error);
        assert!(state.message.starts_with("Network error"));
        assert!(!state.is_checking);
    }
}
