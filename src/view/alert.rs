//! Alert lines for success, error and progress messages. Messages must be safe
//! to print and should never include secrets.

use crate::auth::CheckStatus;
use clap::builder::styling::{AnsiColor, Effects, Style};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    Success,
    Info,
}

impl AlertKind {
    const fn label(self) -> &'static str {
        match self {
            AlertKind::Error => "error",
            AlertKind::Success => "ok",
            AlertKind::Info => "info",
        }
    }

    fn style(self) -> Style {
        match self {
            AlertKind::Error => AnsiColor::Red.on_default() | Effects::BOLD,
            AlertKind::Success => AnsiColor::Green.on_default() | Effects::BOLD,
            AlertKind::Info => AnsiColor::Blue.on_default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

impl Alert {
    #[must_use]
    pub fn new(kind: AlertKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn render(&self, color: bool) -> String {
        let label = self.kind.label();
        if color {
            let style = self.kind.style();
            format!(
                "{}[{label}]{} {}",
                style.render(),
                style.render_reset(),
                self.message
            )
        } else {
            format!("[{label}] {}", self.message)
        }
    }
}

/// Maps a check status to the alert shown under its field; idle shows nothing.
#[must_use]
pub fn status_alert(status: CheckStatus, message: &str) -> Option<Alert> {
    let kind = match status {
        CheckStatus::Empty => return None,
        CheckStatus::Checking => AlertKind::Info,
        CheckStatus::Success => AlertKind::Success,
        CheckStatus::Error => AlertKind::Error,
    };
    Some(Alert::new(kind, message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_render_has_label_and_message() {
        let alert = Alert::new(AlertKind::Error, "Passwords do not match.");
        assert_eq!(alert.render(false), "[error] Passwords do not match.");
    }

    #[test]
    fn colored_render_wraps_label_only() {
        let rendered = Alert::new(AlertKind::Success, "done").render(true);
        assert!(rendered.contains("\u{1b}["));
        assert!(rendered.ends_with(" done"));
    }

    #[test]
    fn status_alert_follows_status() {
        assert_eq!(status_alert(CheckStatus::Empty, "x"), None);
        assert_eq!(
            status_alert(CheckStatus::Checking, "Checking...").map(|a| a.kind),
            Some(AlertKind::Info)
        );
        assert_eq!(
            status_alert(CheckStatus::Success, "ok").map(|a| a.kind),
            Some(AlertKind::Success)
        );
        assert_eq!(
            status_alert(CheckStatus::Error, "no").map(|a| a.kind),
            Some(AlertKind::Error)
        );
    }
}
