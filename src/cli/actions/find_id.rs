use crate::{
    auth::{AuthService, CheckStatus, FindIdController},
    config::AppConfig,
    view::render_find_id,
};
use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::signal::ctrl_c;
use tracing::info;

#[derive(Debug)]
pub struct Args {
    pub config: AppConfig,
    pub email: String,
}

/// Execute the find-id action: print the in-flight view, then the settled one.
/// # Errors
/// Returns an error if the HTTP client cannot be built or the submit task panics.
pub async fn execute(args: Args) -> Result<()> {
    let color = super::use_color();
    let locale = args.config.locale;
    let service = AuthService::new(&args.config)?;
    let controller = Arc::new(FindIdController::new(service));

    controller.set_email(args.email);
    let handle = controller.spawn_submit();

    let in_flight = controller.state();
    if in_flight.status == CheckStatus::Checking {
        println!("{}", render_find_id(&in_flight, locale, color));
    }

    tokio::select! {
        joined = handle => joined.context("find-id task failed")?,
        _ = ctrl_c() => {
            info!("interrupted, cancelling find-id");
            controller.dispose();
            return Ok(());
        }
    }

    println!("{}", render_find_id(&controller.state(), locale, color));

    Ok(())
}
