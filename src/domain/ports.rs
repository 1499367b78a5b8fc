use crate::domain::model::{Download, FieldDescriptor, FieldState};
use crate::utils::error::Result;

/// Page-level side effects: blocking prompts, navigation, downloads, printing.
pub trait PageHost {
    /// Blocking yes/no prompt. Returns `true` when the user accepts.
    fn confirm(&self, message: &str) -> bool;
    /// Blocking informational prompt.
    fn alert(&self, message: &str);
    fn location_path(&self) -> String;
    fn navigate(&self, href: &str) -> Result<()>;
    fn download(&self, download: &Download) -> Result<()>;
    /// Open a new browsing context with `document` and ask it to print after `delay_ms`.
    fn print_document(&self, document: &str, delay_ms: u32) -> Result<()>;
}

/// One form control as seen by validation.
pub trait FormField {
    fn descriptor(&self) -> FieldDescriptor;
    fn value(&self) -> String;
    fn set_value(&self, value: &str);
    /// Map the declarative state onto the page (styling and the error sibling).
    fn render(&self, state: &FieldState) -> Result<()>;
}

/// A listener binding that can be removed from its target.
pub trait Detach {
    fn detach(&mut self);
}
