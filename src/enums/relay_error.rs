use std::error::Error;
use std::fmt;

/// What went wrong between the chat endpoint and the upstream completion API.
/// Callers only ever see the fixed Indonesian strings; this type is for the
/// boundary mapping and the server log.
#[derive(Debug, Clone)]
pub enum RelayError {
    MissingApiKey,
    AuthenticationError(String),
    ApiError(String),
    NetworkError(String),
    SerializationError(String),
}

impl RelayError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, RelayError::MissingApiKey)
    }
}

impl fmt::Display for RelayError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RelayError::MissingApiKey => write!(f, "Missing OpenRouter API key"),
            RelayError::AuthenticationError(msg) => write!(f, "Authentication Error: {}", msg),
            RelayError::ApiError(msg) => write!(f, "OpenRouter API Error: {}", msg),
            RelayError::NetworkError(msg) => write!(f, "Network Error: {}", msg),
            RelayError::SerializationError(msg) => write!(f, "Serialization Error: {}", msg),
        }
    }
}

impl Error for RelayError {}
