//! Delayed navigation for the signup-complete view. The redirect is an explicit
//! effect: the view starts it once after mount and cancels it on teardown, so
//! a torn-down view never navigates.

use crate::{auth::types::AuthResult, i18n::Locale};
use std::time::Duration;
use tokio::{task::JoinHandle, time::sleep};
use tokio_util::sync::CancellationToken;
use tracing::debug;

pub const LOGIN_ROUTE: &str = "/login";

/// Default delay before the completion view moves on.
pub const DEFAULT_REDIRECT_DELAY: Duration = Duration::from_secs(3);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigation {
    pub target: String,
}

impl Navigation {
    #[must_use]
    pub fn to(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }
}

/// A scheduled redirect. Dropping it cancels the timer.
#[derive(Debug)]
pub struct RedirectEffect {
    handle: JoinHandle<Option<Navigation>>,
    cancel: CancellationToken,
}

impl RedirectEffect {
    /// Schedules navigation to `target` after `delay`. The timer also stops
    /// when `parent` is cancelled.
    #[must_use]
    pub fn start(target: impl Into<String>, delay: Duration, parent: &CancellationToken) -> Self {
        let target = target.into();
        let cancel = parent.child_token();
        let timer_cancel = cancel.clone();

        let handle = tokio::spawn(async move {
            tokio::select! {
                () = timer_cancel.cancelled() => {
                    debug!("redirect cancelled");
                    None
                }
                () = sleep(delay) => {
                    debug!(route = %target, "redirecting");
                    Some(Navigation { target })
                }
            }
        });

        Self { handle, cancel }
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Waits for the timer; `None` when it was cancelled first.
    pub async fn wait(mut self) -> Option<Navigation> {
        (&mut self.handle).await.ok().flatten()
    }
}

impl Drop for RedirectEffect {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Signup-complete view model: shows the outcome and redirects once mounted.
#[derive(Debug)]
pub struct SignupComplete {
    result: AuthResult,
    locale: Locale,
    target: String,
    redirect: Option<RedirectEffect>,
    cancel: CancellationToken,
}

impl SignupComplete {
    #[must_use]
    pub fn new(result: AuthResult, locale: Locale, parent: &CancellationToken) -> Self {
        Self {
            result,
            locale,
            target: LOGIN_ROUTE.to_string(),
            redirect: None,
            cancel: parent.child_token(),
        }
    }

    #[must_use]
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    #[must_use]
    pub fn result(&self) -> AuthResult {
        self.result
    }

    /// Lines shown on the completion view.
    #[must_use]
    pub fn messages(&self) -> Vec<&'static str> {
        let messages = self.locale.messages();
        let mut lines = vec![messages.signup_complete];
        if self.result.needs_verification {
            lines.push(messages.needs_verification);
        }
        lines.push(messages.redirecting);
        lines
    }

    /// Starts the redirect timer. Calling it again keeps the first timer.
    pub fn mount(&mut self, delay: Duration) {
        if self.redirect.is_some() {
            return;
        }
        self.redirect = Some(RedirectEffect::start(
            self.target.clone(),
            delay,
            &self.cancel,
        ));
    }

    /// Waits for the redirect started by [`SignupComplete::mount`].
    pub async fn navigation(&mut self) -> Option<Navigation> {
        match self.redirect.take() {
            Some(redirect) => redirect.wait().await,
            None => None,
        }
    }

    pub fn teardown(&mut self) {
        self.cancel.cancel();
        self.redirect = None;
    }
}

impl Drop for SignupComplete {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
