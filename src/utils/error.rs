use crate::core::entry_validation::ValidationFailure;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("Menu entry rejected: {0}")]
    Validation(#[from] ValidationFailure),

    #[error("Seed entry #{index} is invalid: {failure}")]
    SeedEntry {
        index: usize,
        failure: ValidationFailure,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 程序結束碼
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl MenuError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MenuError::Validation(_) => ErrorCategory::Input,
            MenuError::SeedEntry { .. }
            | MenuError::ConfigError { .. }
            | MenuError::ConfigValidationError { .. }
            | MenuError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            MenuError::IoError(_) => ErrorCategory::System,
            MenuError::SerializationError(_)
            | MenuError::CsvError(_)
            | MenuError::ProcessingError { .. } => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            MenuError::Validation(_) => ErrorSeverity::Medium,
            MenuError::SeedEntry { .. }
            | MenuError::ConfigError { .. }
            | MenuError::ConfigValidationError { .. }
            | MenuError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            MenuError::SerializationError(_)
            | MenuError::CsvError(_)
            | MenuError::ProcessingError { .. } => ErrorSeverity::High,
            MenuError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            MenuError::Validation(failure) => failure
                .iter()
                .map(|e| e.prompt())
                .collect::<Vec<_>>()
                .join("; "),
            MenuError::SeedEntry { index, failure } => format!(
                "Fix item #{} in the config file ({})",
                index + 1,
                failure.first().prompt()
            ),
            MenuError::ConfigError { .. } | MenuError::ConfigValidationError { .. } => {
                "Check that the config file exists and is valid TOML".to_string()
            }
            MenuError::InvalidConfigValueError { field, .. } => {
                format!("Correct the '{}' setting in the config file", field)
            }
            MenuError::IoError(_) => "Check file paths and permissions".to_string(),
            MenuError::SerializationError(_)
            | MenuError::CsvError(_)
            | MenuError::ProcessingError { .. } => {
                "Try a different output format with --format".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            MenuError::Validation(failure) => {
                let fields: Vec<&str> = failure.iter().map(|e| e.field()).collect();
                format!("The menu item has invalid fields: {}", fields.join(", "))
            }
            MenuError::SeedEntry { index, .. } => {
                format!("Menu item #{} in the config file is invalid", index + 1)
            }
            MenuError::ConfigError { message } => format!("Could not load config: {}", message),
            MenuError::ConfigValidationError { field, message } => {
                format!("Config problem in '{}': {}", field, message)
            }
            MenuError::InvalidConfigValueError { field, reason, .. } => {
                format!("Config value '{}' is invalid: {}", field, reason)
            }
            MenuError::IoError(e) => format!("File system error: {}", e),
            MenuError::SerializationError(_) | MenuError::CsvError(_) => {
                "Could not format the menu output".to_string()
            }
            MenuError::ProcessingError { message } => message.clone(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MenuError>;
