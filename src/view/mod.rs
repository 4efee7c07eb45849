//! Text rendering of controller state. Views only read snapshots and never call
//! the auth service; user input flows back through the controllers.

mod alert;
mod find_id;
mod signup;

pub use alert::{status_alert, Alert, AlertKind};
pub use find_id::render_find_id;
pub use signup::{render_signup, render_signup_complete};

/// Renders a submit control. `disabled` carries the localized marker shown
/// while a request is in flight.
pub(crate) fn button(label: &str, disabled: Option<&str>) -> String {
    match disabled {
        Some(marker) => format!("[ {label} ] ({marker})"),
        None => format!("[ {label} ]"),
    }
}
