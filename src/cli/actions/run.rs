use crate::cli::actions::{check, find_id, signup, Action};
use anyhow::Result;

/// Execute the provided action.
// This is the single dispatch point for all CLI actions.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<()> {
    match action {
        Action::FindId(args) => find_id::execute(args).await,
        Action::Check(args) => check::execute(args).await,
        Action::Signup(args) => signup::execute(args).await,
    }
}
