use crate::auth::DuplicateKind;
use clap::{builder::PossibleValuesParser, Arg, Command};

pub const CMD_CHECK: &str = "check";
pub const ARG_KIND: &str = "kind";
pub const ARG_VALUE: &str = "value";

#[must_use]
pub fn command() -> Command {
    Command::new(CMD_CHECK)
        .about("Check whether an email or username is still available")
        .arg(
            Arg::new(ARG_KIND)
                .help("What to check")
                .required(true)
                .value_parser(PossibleValuesParser::new(["email", "username"])),
        )
        .arg(
            Arg::new(ARG_VALUE)
                .help("Value to check")
                .required(true),
        )
}

#[must_use]
pub fn parse_kind(value: &str) -> Option<DuplicateKind> {
    match value {
        "email" => Some(DuplicateKind::Email),
        "username" => Some(DuplicateKind::Username),
        _ => None,
    }
}
