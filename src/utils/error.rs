use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("Invalid Arguments")]
    InvalidArguments,

    #[error("IO error on '{}': {source}", .path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed line {line} in '{path}': found {found} tokens, need at least {required}")]
    MalformedLine {
        path: String,
        line: usize,
        found: usize,
        required: usize,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Usage,
    Input,
    Configuration,
}

pub type Result<T> = std::result::Result<T, CheckError>;

impl CheckError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CheckError::IoError {
            path: path.into(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            CheckError::InvalidArguments => ErrorCategory::Usage,
            CheckError::IoError { .. } | CheckError::MalformedLine { .. } => ErrorCategory::Input,
            CheckError::ConfigError { .. } | CheckError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Usage => 255,
            ErrorCategory::Input => 1,
            ErrorCategory::Configuration => 2,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CheckError::InvalidArguments => "Invalid Arguments".to_string(),
            CheckError::IoError { path, source } => match source.kind() {
                std::io::ErrorKind::NotFound => format!("File not found: {}", path.display()),
                std::io::ErrorKind::PermissionDenied => {
                    format!("Permission denied: {}", path.display())
                }
                std::io::ErrorKind::InvalidData => {
                    format!("File is not valid UTF-8 text: {}", path.display())
                }
                _ => format!("Cannot read {}: {}", path.display(), source),
            },
            CheckError::MalformedLine {
                path,
                line,
                found,
                required,
            } => format!(
                "{}:{} has {} fields, expected at least {}",
                path, line, found, required
            ),
            CheckError::ConfigError { message } => format!("Invalid configuration: {}", message),
            CheckError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CheckError::InvalidArguments => "Usage: ecchecker <WORK_FILE>",
            CheckError::IoError { .. } => {
                "Check that the file exists and is readable; pass --reference if correct.txt lives elsewhere"
            }
            CheckError::MalformedLine { .. } => {
                "Every line must contain whitespace-separated tokens up to the highest selected field"
            }
            CheckError::ConfigError { .. } => "Check the TOML syntax of the configuration file",
            CheckError::InvalidConfigValueError { .. } => {
                "Paths must be non-empty; field positions are 1-based"
            }
        }
    }
}
