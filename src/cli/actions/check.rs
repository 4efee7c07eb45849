use crate::{
    auth::{Availability, AuthService, DuplicateKind},
    config::AppConfig,
    view::{Alert, AlertKind},
};
use anyhow::Result;
use tokio::signal::ctrl_c;
use tokio_util::sync::CancellationToken;
use tracing::info;

#[derive(Debug)]
pub struct Args {
    pub config: AppConfig,
    pub kind: DuplicateKind,
    pub value: String,
}

/// Execute a single duplicate check and print the outcome.
/// # Errors
/// Returns an error if the value is blank, the request fails, or the server
/// answers with an unexpected status.
pub async fn execute(args: Args) -> Result<()> {
    let color = super::use_color();
    let service = AuthService::new(&args.config)?;
    let messages = service.locale().messages();
    let cancel = CancellationToken::new();

    let outcome = tokio::select! {
        outcome = service.check_duplicate(args.kind, &args.value, &cancel) => outcome,
        _ = ctrl_c() => {
            info!("interrupted, cancelling duplicate check");
            cancel.cancel();
            return Ok(());
        }
    };

    let alert = match outcome? {
        Availability::Available => Alert::new(
            AlertKind::Success,
            match args.kind {
                DuplicateKind::Email => messages.email_available,
                DuplicateKind::Username => messages.username_available,
            },
        ),
        Availability::Taken(message) => Alert::new(AlertKind::Error, message),
    };
    println!("{}", alert.render(color));

    Ok(())
}
