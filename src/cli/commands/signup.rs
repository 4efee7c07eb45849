use clap::{Arg, Command};

pub const CMD_SIGNUP: &str = "signup";
pub const ARG_EMAIL: &str = "email";
pub const ARG_PASSWORD: &str = "password";
pub const ARG_CONFIRM_PASSWORD: &str = "confirm-password";
pub const ARG_USERNAME: &str = "username";
pub const ARG_ADDRESS: &str = "address";
pub const ARG_DETAIL_ADDRESS: &str = "detail-address";
pub const ARG_PHONE: &str = "phone";
pub const ARG_REDIRECT_DELAY_MS: &str = "redirect-delay-ms";

#[must_use]
pub fn command() -> Command {
    Command::new(CMD_SIGNUP)
        .about("Create an account after checking email and username")
        .arg(
            Arg::new(ARG_EMAIL)
                .short('e')
                .long("email")
                .help("Account email")
                .required(true),
        )
        .arg(
            Arg::new(ARG_USERNAME)
                .short('u')
                .long("username")
                .help("Account username")
                .required(true),
        )
        .arg(
            Arg::new(ARG_PASSWORD)
                .long("password")
                .help("Account password (at least 8 characters)")
                .env("AUTHFLOW_PASSWORD")
                .hide_env_values(true)
                .required(true),
        )
        .arg(
            Arg::new(ARG_CONFIRM_PASSWORD)
                .long("confirm-password")
                .help("Password confirmation, must match --password")
                .env("AUTHFLOW_CONFIRM_PASSWORD")
                .hide_env_values(true)
                .required(true),
        )
        .arg(
            Arg::new(ARG_ADDRESS)
                .long("address")
                .help("Postal address")
                .required(true),
        )
        .arg(
            Arg::new(ARG_DETAIL_ADDRESS)
                .long("detail-address")
                .help("Apartment, suite or floor"),
        )
        .arg(Arg::new(ARG_PHONE).long("phone").help("Phone number"))
        .arg(
            Arg::new(ARG_REDIRECT_DELAY_MS)
                .long("redirect-delay-ms")
                .help("Delay before the completion view redirects")
                .env("AUTHFLOW_REDIRECT_DELAY_MS")
                .default_value("3000")
                .value_parser(clap::value_parser!(u64)),
        )
}
