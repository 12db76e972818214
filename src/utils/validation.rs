use crate::stores::ReactiveState;

/// Required-field check for forms.
///
/// Writes `"<field_name> is required"` into `error` when the form has been
/// submitted and `value` is blank; clears it otherwise.
pub fn validate_field(value: &str, field_name: &str, error: &ReactiveState<String>, is_submitted: bool) {
    error.set(required_message(value, field_name, is_submitted));
}

/// Message `validate_field` would write; empty means valid
pub fn required_message(value: &str, field_name: &str, is_submitted: bool) -> String {
    if is_submitted && value.trim().is_empty() {
        format!("{} is required", field_name)
    } else {
        String::new()
    }
}
