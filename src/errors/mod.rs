use std::error::Error as StdError;
use std::fmt;
use serde::{Deserialize, Serialize};

use crate::config::config_manager::ConfigFileError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum KostWebError {
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },

    SystemError {
        operation: String,
        reason: String,
    },
}

impl KostWebError {
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(|s| s.to_string()),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError { message, field, suggestion } => {
                let mut msg = format!("Configuration Error: {}", message);
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {})", field));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::SystemError { operation, reason } => {
                format!("System error during {}: {}", operation, reason)
            }
        }
    }
}

impl fmt::Display for KostWebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl StdError for KostWebError {}

/// Result type alias for kost-web operations
pub type KostWebResult<T> = Result<T, KostWebError>;

impl From<std::io::Error> for KostWebError {
    fn from(error: std::io::Error) -> Self {
        KostWebError::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<ConfigFileError> for KostWebError {
    fn from(error: ConfigFileError) -> Self {
        KostWebError::ConfigurationError {
            message: error.to_string(),
            field: None,
            suggestion: Some("Run 'kost-web init' to create a fresh sample config".to_string()),
        }
    }
}
