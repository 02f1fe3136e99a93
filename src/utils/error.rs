use crate::domain::clock_time::ClockTime;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkingTimeError {
    #[error("Range `{start} to {end}` does not define a valid workday.")]
    InvalidRange { start: ClockTime, end: ClockTime },

    #[error("{field} must not be missing")]
    MissingArgument { field: String },

    #[error("Invalid time `{value}`: {reason}")]
    InvalidTimeFormat { value: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value `{value}` for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl WorkingTimeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidRange { .. }
            | Self::MissingArgument { .. }
            | Self::InvalidTimeFormat { .. } => ErrorCategory::Input,
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidRange { .. } => {
                "Use a start at or after 00:00 and an end before 23:59"
            }
            Self::MissingArgument { .. } => "Provide both the start and the end of the workday",
            Self::InvalidTimeFormat { .. } => "Write times as HH:MM, e.g. 08:30",
            Self::IoError(_) => "Check that the file exists and is readable",
            Self::SerializationError(_) => "Re-run with --format text",
            Self::ConfigValidationError { .. } => "Make sure the file is valid TOML",
            Self::InvalidConfigValueError { .. } | Self::MissingConfigError { .. } => {
                "Fix the named field in the configuration file"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Invalid input: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, WorkingTimeError>;
