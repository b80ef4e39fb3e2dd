//! Error handling for passgen
//!
//! The generator and the strength scorer never fail. Everything here belongs
//! to the layers around them: configuration, input validation, prompts and
//! the clipboard.

use thiserror::Error;

/// Main error type for passgen
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PassgenError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Clipboard error: {message}")]
    Clipboard { message: String },

    #[error("Parse error: {message}")]
    Parse {
        message: String,
        content: Option<String>,
    },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("CLI error: {message}")]
    Cli { message: String },
}

impl PassgenError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a clipboard error
    pub fn clipboard(message: impl Into<String>) -> Self {
        Self::Clipboard {
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>, content: Option<String>) -> Self {
        Self::Parse {
            message: message.into(),
            content,
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Io {
            message: message.into(),
            path,
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create a CLI error
    pub fn cli(message: impl Into<String>) -> Self {
        Self::Cli {
            message: message.into(),
        }
    }

    /// Whether the user should fix their input rather than their setup
    pub fn is_user_input(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::Cli { .. })
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message } => {
                format!("❌ Configuration problem: {}\n💡 Check your .env file, PASSGEN_* variables or --config file", message)
            }
            Self::Validation { message } => {
                format!("❌ {}\n💡 Use --length and at least one of --uppercase, --lowercase, --numbers, --symbols", message)
            }
            Self::Clipboard { message } => {
                format!("⚠️  Copy failed: {}\n💡 The password is still shown above", message)
            }
            Self::Parse { message, .. } => {
                format!("❌ Parse error: {}\n💡 Check the file is valid JSON", message)
            }
            Self::Io { message, path } => {
                let path_info = path.as_ref().map_or(String::new(), |p| format!(" ({})", p));
                format!("❌ File error{}: {}\n💡 Check file permissions and paths", path_info, message)
            }
            Self::Internal { message } => {
                format!("❌ Internal error: {}\n💡 This is a bug, please report it", message)
            }
            Self::Cli { message } => {
                format!("❌ Command error: {}\n💡 Use --help for usage information", message)
            }
        }
    }
}

/// Convert from common error types
impl From<serde_json::Error> for PassgenError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.to_string(), None)
    }
}

impl From<std::io::Error> for PassgenError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string(), None)
    }
}

impl From<inquire::InquireError> for PassgenError {
    fn from(err: inquire::InquireError) -> Self {
        match err {
            inquire::InquireError::OperationCanceled
            | inquire::InquireError::OperationInterrupted => Self::cli("Cancelled by user"),
            inquire::InquireError::NotTTY => {
                Self::cli("Interactive mode needs a terminal, pass options as flags instead")
            }
            other => Self::cli(other.to_string()),
        }
    }
}

impl From<arboard::Error> for PassgenError {
    fn from(err: arboard::Error) -> Self {
        Self::clipboard(err.to_string())
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, PassgenError>;

/// Helper macros for common error patterns
#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::error::PassgenError::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::PassgenError::config(format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! validation_error {
    ($msg:expr) => {
        $crate::error::PassgenError::validation($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::PassgenError::validation(format!($fmt, $($arg)*))
    };
}
