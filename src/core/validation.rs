//! Field-level rules. Everything here works on plain strings and
//! [`FieldDescriptor`]s so it can be exercised without a browser.

use crate::domain::model::{FieldDescriptor, FieldState};
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9+()\-]{10,15}$").expect("phone pattern compiles"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// 10 to 15 characters of digits, `+`, `-`, `(`, `)` once whitespace is removed.
pub fn is_valid_phone(phone: &str) -> bool {
    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    PHONE_RE.is_match(&compact)
}

/// Pre-submit check for one field. Marks carry no message.
pub fn validate_field(field: &FieldDescriptor, raw_value: &str, phone_field: &str) -> FieldState {
    let value = raw_value.trim();

    if field.required && value.is_empty() {
        return FieldState::Invalid { message: None };
    }

    if field.is_email() && !value.is_empty() && !is_valid_email(value) {
        return FieldState::Invalid { message: None };
    }

    if field.is_phone(phone_field) && !value.is_empty() && !is_valid_phone(value) {
        return FieldState::Invalid { message: None };
    }

    FieldState::Valid
}

/// Focus-loss check. Empty values are never flagged here; `None` means the
/// field is neither an email nor a phone input and is left alone.
pub fn blur_state(
    field: &FieldDescriptor,
    value: &str,
    phone_field: &str,
    email_message: &str,
    phone_message: &str,
) -> Option<FieldState> {
    if field.is_email() {
        return Some(if !value.is_empty() && !is_valid_email(value) {
            FieldState::invalid(email_message)
        } else {
            FieldState::Valid
        });
    }

    if field.is_phone(phone_field) {
        return Some(if !value.is_empty() && !is_valid_phone(value) {
            FieldState::invalid(phone_message)
        } else {
            FieldState::Valid
        });
    }

    None
}

/// Inline style the rendering layer applies for a state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldStyle {
    pub border_color: String,
    pub box_shadow: String,
}

impl FieldStyle {
    pub fn for_state(state: &FieldState, styles: &crate::config::StyleConfig) -> Self {
        match state {
            FieldState::Valid => Self {
                border_color: styles.valid_border.clone(),
                box_shadow: "none".to_string(),
            },
            FieldState::Invalid { .. } => Self {
                border_color: styles.invalid_border.clone(),
                box_shadow: styles.invalid_shadow.clone(),
            },
        }
    }
}
