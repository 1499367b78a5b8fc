use crate::config::PageConfig;
use crate::core::search::{search_target, SearchOutcome};
use crate::core::table::{csv_download, print_document};
use crate::core::validation::{blur_state, is_valid_email, is_valid_phone, validate_field};
use crate::domain::model::{DeleteDecision, FieldState, PageKind};
use crate::domain::ports::{FormField, PageHost};
use crate::utils::error::Result;

/// Event handling that does not depend on how the page is represented.
///
/// The web adapter owns one of these and forwards DOM events to it; tests
/// drive it with mock hosts and fields.
pub struct PageController<H: PageHost> {
    host: H,
    config: PageConfig,
}

impl<H: PageHost> PageController<H> {
    pub fn new(host: H, config: PageConfig) -> Self {
        Self { host, config }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Delete triggers only prompt inside a POST form. `form_method` is the raw
    /// `method` attribute of the closest form, if there is one.
    pub fn confirm_delete(&self, form_method: Option<&str>) -> DeleteDecision {
        let in_post_form = form_method
            .map(|method| method.trim().eq_ignore_ascii_case("post"))
            .unwrap_or(false);
        if !in_post_form {
            return DeleteDecision::Proceed;
        }

        if self.host.confirm(&self.config.messages.confirm_delete) {
            DeleteDecision::Proceed
        } else {
            tracing::debug!("Delete cancelled by user");
            DeleteDecision::Cancel
        }
    }

    /// Pre-submit pass over the form's required fields. Every field is
    /// rendered; returns whether submission may continue.
    pub fn validate_form<F: FormField>(&self, fields: &[F]) -> Result<bool> {
        let mut valid = true;
        for field in fields {
            let state = validate_field(&field.descriptor(), &field.value(), &self.config.fields.phone);
            if !state.is_valid() {
                valid = false;
            }
            field.render(&state)?;
        }
        if !valid {
            tracing::debug!("Form submission blocked by validation");
        }
        Ok(valid)
    }

    /// Generic focus-loss check for email and phone inputs.
    pub fn validate_on_blur<F: FormField>(&self, field: &F) -> Result<()> {
        let messages = &self.config.messages;
        if let Some(state) = blur_state(
            &field.descriptor(),
            &field.value(),
            &self.config.fields.phone,
            &messages.invalid_email,
            &messages.invalid_phone,
        ) {
            field.render(&state)?;
        }
        Ok(())
    }

    /// Student-form focus-loss checks. These only ever mark; clearing is left
    /// to the generic handler.
    pub fn student_email_blur<F: FormField>(&self, field: &F) -> Result<()> {
        let value = field.value();
        if !value.is_empty() && !is_valid_email(&value) {
            field.render(&FieldState::invalid(&self.config.messages.student_invalid_email))?;
        }
        Ok(())
    }

    pub fn student_phone_blur<F: FormField>(&self, field: &F) -> Result<()> {
        let value = field.value();
        if !value.is_empty() && !is_valid_phone(&value) {
            field.render(&FieldState::invalid(&self.config.messages.student_invalid_phone))?;
        }
        Ok(())
    }

    pub fn perform_search(&self, query: &str) -> Result<SearchOutcome> {
        let outcome = search_target(&self.host.location_path(), query);
        match &outcome {
            SearchOutcome::EmptyQuery => self.host.alert(&self.config.messages.empty_search),
            SearchOutcome::Navigate(href) => {
                tracing::debug!("Searching via {}", href);
                self.host.navigate(href)?;
            }
        }
        Ok(outcome)
    }

    /// `rows` is `None` when the page has no primary table.
    pub fn export_table(&self, rows: Option<&[Vec<String>]>, filename: Option<&str>) -> Result<()> {
        let Some(rows) = rows else {
            self.host.alert(&self.config.messages.no_table_export);
            return Ok(());
        };

        let download = csv_download(rows, filename)?;
        tracing::info!("Exporting {} rows to {}", rows.len(), download.filename);
        self.host.download(&download)
    }

    pub fn print_table(&self, table_html: Option<&str>) -> Result<()> {
        let Some(table_html) = table_html else {
            self.host.alert(&self.config.messages.no_table_print);
            return Ok(());
        };

        self.host
            .print_document(&print_document(table_html), self.config.timings.print_delay_ms)
    }

    pub fn resolve_page(&self, explicit: Option<&str>) -> PageKind {
        PageKind::resolve(explicit, &self.host.location_path())
    }
}

/// Username input: strip surrounding whitespace as the user types.
pub fn trim_field<F: FormField>(field: &F) {
    let value = field.value();
    let trimmed = value.trim();
    if trimmed.len() != value.len() {
        field.set_value(trimmed);
    }
}

/// Student ID input: force uppercase as the user types.
pub fn uppercase_field<F: FormField>(field: &F) {
    let value = field.value();
    let upper = value.to_uppercase();
    if upper != value {
        field.set_value(&upper);
    }
}

pub fn is_enter_key(key: &str) -> bool {
    key == "Enter"
}

pub fn init_dashboard_charts() {
    // chart library hook
    tracing::info!("dashboard charts initialized");
}
