use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON config error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML config error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Date parsing error: {0}")]
    DateError(#[from] chrono::ParseError),

    #[error("Invalid configuration value for {field}: {value:?} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Element not found: {selector}")]
    MissingElement { selector: String },

    #[error("DOM operation failed: {message}")]
    DomError { message: String },
}

impl PageError {
    pub fn dom(message: impl Into<String>) -> Self {
        PageError::DomError {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PageError>;
