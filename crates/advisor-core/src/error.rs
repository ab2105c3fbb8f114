//! Error Types

use thiserror::Error;

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// An environment value could not be parsed into its expected type
    #[error("Invalid configuration: {key}={value:?} ({reason})")]
    InvalidConfig {
        key: String,
        value: String,
        reason: String,
    },
}

impl CoreError {
    pub fn invalid_config(
        key: impl Into<String>,
        value: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        Self::InvalidConfig {
            key: key.into(),
            value: value.into(),
            reason: reason.to_string(),
        }
    }

    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidConfig { key, .. } => {
                format!("The environment variable {key} has an invalid value.")
            }
        }
    }
}
