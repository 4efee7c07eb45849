use crate::{
    auth::{AuthService, SignupComplete, SignupController, SignupData},
    config::AppConfig,
    view::{render_signup, render_signup_complete},
};
use anyhow::{bail, Result};
use std::time::Duration;
use tokio::signal::ctrl_c;
use tracing::info;

#[derive(Debug)]
pub struct Args {
    pub config: AppConfig,
    pub data: SignupData,
    pub redirect_delay: Duration,
}

/// Execute the signup flow: duplicate checks, local validation, submit, then
/// the completion view with its delayed redirect.
/// # Errors
/// Returns an error if the HTTP client cannot be built or the form was not
/// submitted.
pub async fn execute(args: Args) -> Result<()> {
    let color = super::use_color();
    let service = AuthService::new(&args.config)?;
    let locale = service.locale();
    let controller = SignupController::new(service);

    let SignupData {
        email,
        password,
        confirm_password,
        username,
        address,
        phone,
        detail_address,
    } = args.data;
    controller.set_email(email);
    controller.set_username(username);
    controller.set_password(password);
    controller.set_confirm_password(confirm_password);
    controller.set_address(address);
    controller.set_phone(phone);
    controller.set_detail_address(detail_address);

    let flow = async {
        tokio::join!(controller.check_email(), controller.check_username());
        controller.submit().await
    };

    let navigation = tokio::select! {
        navigation = flow => navigation,
        _ = ctrl_c() => {
            info!("interrupted, cancelling signup");
            controller.dispose();
            return Ok(());
        }
    };

    let state = controller.state();
    println!("{}", render_signup(&state, locale, color));

    let (Some(navigation), Some(result)) = (navigation, state.result) else {
        bail!("signup was not submitted");
    };
    println!("-> {}", navigation.target);

    let mut complete = SignupComplete::new(result, locale, controller.cancel_token());
    complete.mount(args.redirect_delay);
    println!("{}", render_signup_complete(&complete, color));

    tokio::select! {
        next = complete.navigation() => {
            if let Some(next) = next {
                println!("-> {}", next.target);
            }
        }
        _ = ctrl_c() => {
            info!("interrupted, skipping redirect");
            complete.teardown();
        }
    }

    Ok(())
}
