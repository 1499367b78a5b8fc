pub mod toml_config;

use serde::{Deserialize, Serialize};

/// Everything the controller needs to know about the page markup, plus the
/// fixed delays, messages and colours it applies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Debug-level logging for this crate.
    pub verbose: bool,
    pub selectors: SelectorConfig,
    pub fields: FieldNameConfig,
    pub timings: TimingConfig,
    pub messages: MessageConfig,
    pub styles: StyleConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    pub delete_trigger: String,
    pub form: String,
    pub alert: String,
    pub alert_close: String,
    pub search_input: String,
    pub search_button: String,
    pub table: String,
    pub required_fields: String,
    pub email_inputs: String,
    pub tel_inputs: String,
    pub submit_button: String,
    /// Class name (not selector) of the inline error element.
    pub input_error_class: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            delete_trigger: ".btn-delete".to_string(),
            form: "form".to_string(),
            alert: ".alert".to_string(),
            alert_close: ".alert-close".to_string(),
            search_input: ".search-input".to_string(),
            search_button: ".search-button".to_string(),
            table: ".table".to_string(),
            required_fields: "input[required], select[required], textarea[required]".to_string(),
            email_inputs: "input[type=\"email\"]".to_string(),
            tel_inputs: "input[type=\"tel\"]".to_string(),
            submit_button: "button[type=\"submit\"]".to_string(),
            input_error_class: "input-error".to_string(),
        }
    }
}

impl SelectorConfig {
    /// Phone inputs are matched by type or by the configured field name.
    pub fn phone_inputs(&self, phone_field: &str) -> String {
        format!("{}, input[name=\"{}\"]", self.tel_inputs, phone_field)
    }

    pub fn input_error(&self) -> String {
        format!(".{}", self.input_error_class)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldNameConfig {
    pub phone: String,
    pub email: String,
    pub student_id: String,
    pub username: String,
    pub password: String,
}

impl Default for FieldNameConfig {
    fn default() -> Self {
        Self {
            phone: "s_phone".to_string(),
            email: "s_email".to_string(),
            student_id: "student_id".to_string(),
            username: "username".to_string(),
            password: "password".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub alert_fade_delay_ms: u32,
    pub notification_fade_delay_ms: u32,
    pub fade_duration_ms: u32,
    pub print_delay_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            alert_fade_delay_ms: 5000,
            notification_fade_delay_ms: 3000,
            fade_duration_ms: 300,
            print_delay_ms: 250,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageConfig {
    pub confirm_delete: String,
    pub empty_search: String,
    pub invalid_email: String,
    pub invalid_phone: String,
    pub student_invalid_email: String,
    pub student_invalid_phone: String,
    pub no_table_export: String,
    pub no_table_print: String,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            confirm_delete:
                "Are you sure you want to delete this record? This action cannot be undone."
                    .to_string(),
            empty_search: "Please enter a search term".to_string(),
            invalid_email: "Please enter a valid email address".to_string(),
            invalid_phone: "Please enter a valid phone number (10-15 digits)".to_string(),
            student_invalid_email: "Invalid email format".to_string(),
            student_invalid_phone: "Invalid phone number".to_string(),
            no_table_export: "No table found to export".to_string(),
            no_table_print: "No table found to print".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub invalid_border: String,
    pub invalid_shadow: String,
    pub valid_border: String,
    pub error_text: String,
    pub row_hover: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            invalid_border: "#ff6b6b".to_string(),
            invalid_shadow: "0 0 5px rgba(255, 107, 107, 0.3)".to_string(),
            valid_border: "#e0e0e0".to_string(),
            error_text: "#ff6b6b".to_string(),
            row_hover: "#f0f0f0".to_string(),
        }
    }
}
