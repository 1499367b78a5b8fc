use crate::utils::error::{PageError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PageError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// CSS selectors only need to be non-empty and free of characters that can
/// never start a valid selector list.
pub fn validate_selector(field_name: &str, selector: &str) -> Result<()> {
    validate_non_empty_string(field_name, selector)?;

    let trimmed = selector.trim();
    if trimmed.starts_with(',') || trimmed.ends_with(',') || trimmed.contains('\0') {
        return Err(PageError::InvalidConfigValue {
            field: field_name.to_string(),
            value: selector.to_string(),
            reason: "Malformed selector list".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(PageError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_css_color(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    if value.contains(';') || value.contains('{') || value.contains('}') {
        return Err(PageError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Style values cannot contain declaration separators".to_string(),
        });
    }
    Ok(())
}
