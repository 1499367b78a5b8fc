use crate::config::PageConfig;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_css_color, validate_non_empty_string, validate_range, validate_selector, Validate,
};
use std::path::Path;

const MAX_DELAY_MS: u32 = 600_000;

impl PageConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: PageConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse the JSON object a host page hands to the constructor.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: PageConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Missing or blank input means defaults.
    pub fn from_optional_json(content: Option<&str>) -> Result<Self> {
        match content.map(str::trim) {
            Some(json) if !json.is_empty() => Self::from_json_str(json),
            _ => Ok(Self::default()),
        }
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        let s = &self.selectors;
        for (field, selector) in [
            ("selectors.delete_trigger", &s.delete_trigger),
            ("selectors.form", &s.form),
            ("selectors.alert", &s.alert),
            ("selectors.alert_close", &s.alert_close),
            ("selectors.search_input", &s.search_input),
            ("selectors.search_button", &s.search_button),
            ("selectors.table", &s.table),
            ("selectors.required_fields", &s.required_fields),
            ("selectors.email_inputs", &s.email_inputs),
            ("selectors.tel_inputs", &s.tel_inputs),
            ("selectors.submit_button", &s.submit_button),
        ] {
            validate_selector(field, selector)?;
        }
        validate_non_empty_string("selectors.input_error_class", &s.input_error_class)?;

        let f = &self.fields;
        for (field, name) in [
            ("fields.phone", &f.phone),
            ("fields.email", &f.email),
            ("fields.student_id", &f.student_id),
            ("fields.username", &f.username),
            ("fields.password", &f.password),
        ] {
            validate_non_empty_string(field, name)?;
        }

        let t = &self.timings;
        validate_range("timings.alert_fade_delay_ms", t.alert_fade_delay_ms, 1, MAX_DELAY_MS)?;
        validate_range(
            "timings.notification_fade_delay_ms",
            t.notification_fade_delay_ms,
            1,
            MAX_DELAY_MS,
        )?;
        validate_range("timings.fade_duration_ms", t.fade_duration_ms, 0, MAX_DELAY_MS)?;
        validate_range("timings.print_delay_ms", t.print_delay_ms, 0, MAX_DELAY_MS)?;

        let st = &self.styles;
        validate_css_color("styles.invalid_border", &st.invalid_border)?;
        validate_css_color("styles.invalid_shadow", &st.invalid_shadow)?;
        validate_css_color("styles.valid_border", &st.valid_border)?;
        validate_css_color("styles.error_text", &st.error_text)?;
        validate_css_color("styles.row_hover", &st.row_hover)?;

        Ok(())
    }
}

impl Validate for PageConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
