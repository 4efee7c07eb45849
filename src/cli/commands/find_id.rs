use clap::{Arg, Command};

pub const CMD_FIND_ID: &str = "find-id";
pub const ARG_EMAIL: &str = "email";

#[must_use]
pub fn command() -> Command {
    Command::new(CMD_FIND_ID)
        .about("Check whether an account is registered for an email")
        .arg(
            Arg::new(ARG_EMAIL)
                .short('e')
                .long("email")
                .help("Email address to look up")
                .required(true),
        )
}
