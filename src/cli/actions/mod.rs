pub mod check;
pub mod find_id;
pub mod signup;

// Internal "interpreter" for `Action`.
mod run;

use std::io::IsTerminal;

#[derive(Debug)]
pub enum Action {
    FindId(find_id::Args),
    Check(check::Args),
    Signup(signup::Args),
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self) -> anyhow::Result<()> {
        run::execute(self).await
    }
}

/// Views are styled only when stdout is a terminal.
fn use_color() -> bool {
    std::io::stdout().is_terminal()
}
