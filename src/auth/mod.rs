//! Auth feature module covering find-id, signup duplicate checks, signup
//! submission and the signup-complete redirect. It keeps request logic out of
//! the view and must stay aligned with the backend JSON contract. Signup
//! payloads carry passwords and must never be logged.
//!
//! Flow Overview: controllers validate locally with [`validation`], call
//! [`client::AuthService`], and publish state snapshots that the `view`
//! module renders. Each controller owns a cancellation token that is fired on
//! dispose or drop, so late responses never touch a torn-down form.

pub mod client;
pub mod find_id;
pub mod redirect;
pub mod signup;
pub mod types;
pub mod validation;

pub use client::AuthService;
pub use find_id::{FindIdController, FindIdState};
pub use redirect::{Navigation, RedirectEffect, SignupComplete};
pub use signup::{SignupController, SignupState};
pub use types::{Availability, AuthResult, CheckStatus, DuplicateKind, SignupData};
