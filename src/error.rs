//! Error types for the service and its command dispatcher
//!
//! Provides structured error handling with context and proper error chains.

use thiserror::Error;

/// Main error type for the application
#[derive(Error, Debug)]
pub enum AppError {
    /// A command factory failed to build its command
    #[error("error instantiating {name}: {source}")]
    Instantiate {
        name: String,
        #[source]
        source: anyhow::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// HTTP server errors
    #[error("Server error: {message}")]
    Server {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Validation errors
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl AppError {
    /// Create a new instantiation error for the named command
    pub fn instantiate(name: impl Into<String>, source: anyhow::Error) -> Self {
        Self::Instantiate {
            name: name.into(),
            source,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new configuration error caused by `source`
    pub fn config_with_source<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new server error
    pub fn server(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Server {
            message: message.into(),
            source,
        }
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Process exit code to report for this error
    pub const fn exit_code(&self) -> i32 {
        1
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instantiate_message_names_command() {
        let err = AppError::instantiate("build", anyhow::anyhow!("missing toolchain"));
        assert_eq!(err.to_string(), "error instantiating build: missing toolchain");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_config_error_keeps_source() {
        let parse_err = "x".parse::<u16>().unwrap_err();
        let err = AppError::config_with_source("invalid PORT", parse_err);
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.to_string(), "Configuration error: invalid PORT");
    }
}
