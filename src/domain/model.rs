use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which page-specific initializer runs at full load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    Login,
    Student,
    Dashboard,
    Generic,
}

impl PageKind {
    /// Substring detection on the navigation path. First match wins, in the
    /// order login, student, dashboard.
    pub fn detect(path: &str) -> Self {
        [PageKind::Login, PageKind::Student, PageKind::Dashboard]
            .into_iter()
            .find(|kind| path.contains(kind.as_str()))
            .unwrap_or(PageKind::Generic)
    }

    /// An explicit kind from the template wins over path detection.
    pub fn resolve(explicit: Option<&str>, path: &str) -> Self {
        explicit
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_else(|| Self::detect(path))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PageKind::Login => "login",
            PageKind::Student => "student",
            PageKind::Dashboard => "dashboard",
            PageKind::Generic => "generic",
        }
    }
}

impl FromStr for PageKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "login" => Ok(PageKind::Login),
            "student" | "students" => Ok(PageKind::Student),
            "dashboard" => Ok(PageKind::Dashboard),
            "generic" | "" => Ok(PageKind::Generic),
            other => Err(format!("unknown page kind: {}", other)),
        }
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldTag {
    Input,
    Select,
    TextArea,
}

/// The attributes of a form control that validation looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub tag: FieldTag,
    /// Lowercased `type` attribute; empty for select and textarea.
    pub input_type: String,
    pub name: String,
    pub required: bool,
}

impl FieldDescriptor {
    pub fn input(input_type: &str, name: &str, required: bool) -> Self {
        Self {
            tag: FieldTag::Input,
            input_type: input_type.to_ascii_lowercase(),
            name: name.to_string(),
            required,
        }
    }

    pub fn is_email(&self) -> bool {
        self.tag == FieldTag::Input && self.input_type == "email"
    }

    pub fn is_phone(&self, phone_field_name: &str) -> bool {
        self.tag == FieldTag::Input
            && (self.input_type == "tel" || self.name == phone_field_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldState {
    #[default]
    Valid,
    Invalid { message: Option<String> },
}

impl FieldState {
    pub fn invalid(message: impl Into<String>) -> Self {
        FieldState::Invalid {
            message: Some(message.into()),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, FieldState::Valid)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            FieldState::Invalid { message } => message.as_deref(),
            FieldState::Valid => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertVariant {
    #[default]
    Info,
    Success,
    Warning,
    Error,
    /// Flash category the server uses for failures.
    Danger,
}

impl AlertVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertVariant::Info => "info",
            AlertVariant::Success => "success",
            AlertVariant::Warning => "warning",
            AlertVariant::Error => "error",
            AlertVariant::Danger => "danger",
        }
    }

    /// Like `parse`, but unknown names fall back to [`AlertVariant::Info`].
    pub fn parse_or_default(raw: &str) -> Self {
        raw.parse().unwrap_or_else(|e: String| {
            tracing::debug!("{}, using info", e);
            AlertVariant::default()
        })
    }

    pub fn class_name(&self) -> String {
        format!("alert alert-{}", self.as_str())
    }
}

impl FromStr for AlertVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "info" | "" => Ok(AlertVariant::Info),
            "success" => Ok(AlertVariant::Success),
            "warning" => Ok(AlertVariant::Warning),
            "error" => Ok(AlertVariant::Error),
            "danger" => Ok(AlertVariant::Danger),
            other => Err(format!("unknown alert variant: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    Numeric,
    Lexicographic,
}

impl SortMode {
    pub fn from_flag(numeric: bool) -> Self {
        if numeric {
            SortMode::Numeric
        } else {
            SortMode::Lexicographic
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteDecision {
    Proceed,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    Confirm,
    Cancel,
    Backdrop,
}

/// A file handed to the host for client-side download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub filename: String,
    pub mime_type: String,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_page_kind_priority() {
        assert_eq!(PageKind::detect("/login"), PageKind::Login);
        assert_eq!(PageKind::detect("/student/S001"), PageKind::Student);
        assert_eq!(PageKind::detect("/add_student"), PageKind::Student);
        assert_eq!(PageKind::detect("/dashboard"), PageKind::Dashboard);
        assert_eq!(PageKind::detect("/courses"), PageKind::Generic);
        // first match wins
        assert_eq!(PageKind::detect("/login/student/dashboard"), PageKind::Login);
        assert_eq!(PageKind::detect("/students/dashboard"), PageKind::Student);
    }

    #[test]
    fn test_resolve_prefers_explicit_kind() {
        assert_eq!(PageKind::resolve(Some("dashboard"), "/login"), PageKind::Dashboard);
        assert_eq!(PageKind::resolve(None, "/login"), PageKind::Login);
        assert_eq!(PageKind::resolve(Some("bogus"), "/login"), PageKind::Login);
    }

    #[test]
    fn test_phone_field_by_type_or_name() {
        let tel = FieldDescriptor::input("TEL", "contact", false);
        let named = FieldDescriptor::input("text", "s_phone", true);
        let other = FieldDescriptor::input("text", "s_name", true);
        assert!(tel.is_phone("s_phone"));
        assert!(named.is_phone("s_phone"));
        assert!(!other.is_phone("s_phone"));
    }

    #[test]
    fn test_alert_variant_class_name() {
        assert_eq!(AlertVariant::default().class_name(), "alert alert-info");
        assert_eq!("Warning".parse::<AlertVariant>().unwrap(), AlertVariant::Warning);
        assert!("danger-zone".parse::<AlertVariant>().is_err());
    }

    #[test]
    fn test_alert_variant_accepts_flash_categories() {
        assert_eq!(
            AlertVariant::parse_or_default("danger").class_name(),
            "alert alert-danger"
        );
        assert_eq!(AlertVariant::parse_or_default(" Success "), AlertVariant::Success);
        assert_eq!(AlertVariant::parse_or_default("danger-zone"), AlertVariant::Info);
    }
}
