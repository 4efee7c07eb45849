use crate::{
    auth::FindIdState,
    i18n::Locale,
    view::{button, status_alert},
};

/// Renders the find-id form: the email, the submit control and the status alert.
#[must_use]
pub fn render_find_id(state: &FindIdState, locale: Locale, color: bool) -> String {
    let messages = locale.messages();
    let disabled = state.is_checking.then_some(messages.disabled);
    let mut lines = vec![
        messages.find_id_title.to_string(),
        format!("  {}: {}", messages.label_email, state.email),
        format!("  {}", button(messages.find_id_button, disabled)),
    ];

    if let Some(alert) = status_alert(state.status, &state.message) {
        lines.push(format!("  {}", alert.render(color)));
    }

    lines.join("\n")
}
