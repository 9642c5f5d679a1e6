//! Error types for the startup-namer library.
//!
//! The naming pipeline itself never fails: missing keywords are substituted,
//! unknown industries fall back to the default profile and malformed
//! candidates are filtered out. The fallible surfaces are configuration and
//! lexicon loading, which is what this module covers.

use std::io;

use thiserror::Error;

/// Main result type for startup-namer operations.
pub type Result<T> = std::result::Result<T, NamerError>;

/// Error type for all fallible startup-namer operations.
#[derive(Error, Debug)]
pub enum NamerError {
    /// I/O related errors (reading config or lexicon files)
    #[error("I/O error: {message}")]
    Io {
        /// Human-readable error message
        message: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        /// Error description
        message: String,
        /// Configuration field that caused the error
        field: Option<String>,
    },

    /// Lexicon errors (missing default profile, empty vocabularies)
    #[error("Lexicon error: {message}")]
    Lexicon {
        /// Error description
        message: String,
        /// Industry tag the error relates to
        industry: Option<String>,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error description
        message: String,
        /// Data format being processed
        data_type: Option<String>,
        /// Underlying serialization error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Validation errors for input data
    #[error("Validation error: {message}")]
    Validation {
        /// Error description
        message: String,
        /// Field or input that failed validation
        field: Option<String>,
        /// Additional context
        context: Option<String>,
    },
}

impl NamerError {
    /// Create a new I/O error with context
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: None,
        }
    }

    /// Create a new configuration error with field context
    pub fn config_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a new lexicon error
    pub fn lexicon(message: impl Into<String>) -> Self {
        Self::Lexicon {
            message: message.into(),
            industry: None,
        }
    }

    /// Create a new lexicon error scoped to one industry profile
    pub fn lexicon_industry(message: impl Into<String>, industry: impl Into<String>) -> Self {
        Self::Lexicon {
            message: message.into(),
            industry: Some(industry.into()),
        }
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: None,
            context: None,
        }
    }

    /// Create a new validation error naming the offending field
    pub fn validation_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.into()),
            context: None,
        }
    }

    /// Add context to an existing error
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        match &mut self {
            Self::Validation { context: ctx, .. } => {
                *ctx = Some(context.into());
            }
            Self::Io { message, .. } | Self::Serialization { message, .. } => {
                *message = format!("{}: {message}", context.into());
            }
            _ => {}
        }
        self
    }
}

impl From<io::Error> for NamerError {
    fn from(err: io::Error) -> Self {
        Self::io("I/O operation failed", err)
    }
}

impl From<serde_json::Error> for NamerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: format!("JSON serialization failed: {err}"),
            data_type: Some("JSON".to_string()),
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_yaml::Error> for NamerError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization {
            message: format!("YAML serialization failed: {err}"),
            data_type: Some("YAML".to_string()),
            source: Some(Box::new(err)),
        }
    }
}

/// Result extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;

    /// Add static context to an error result
    fn context(self, msg: &'static str) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<NamerError>,
{
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.into().with_context(f()))
    }

    fn context(self, msg: &'static str) -> Result<T> {
        self.map_err(|e| e.into().with_context(msg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = NamerError::config("Invalid configuration");
        assert!(matches!(err, NamerError::Config { .. }));

        let err = NamerError::lexicon_industry("No metaphors", "fintech");
        assert!(matches!(err, NamerError::Lexicon { .. }));
    }

    #[test]
    fn test_validation_with_context() {
        let err = NamerError::validation_field("must be positive", "max_results")
            .with_context("while loading namer.yml");

        if let NamerError::Validation {
            message,
            field,
            context,
        } = err
        {
            assert_eq!(message, "must be positive");
            assert_eq!(field, Some("max_results".to_string()));
            assert_eq!(context, Some("while loading namer.yml".to_string()));
        } else {
            panic!("Expected Validation error");
        }
    }

    #[test]
    fn test_io_context_prefixes_message() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));

        let err = result.context("Failed to read lexicon").unwrap_err();
        if let NamerError::Io { message, source } = err {
            assert!(message.starts_with("Failed to read lexicon"));
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        } else {
            panic!("Expected Io error");
        }
    }

    #[test]
    fn test_config_field_error() {
        let err = NamerError::config_field("Invalid value", "filter.min_overall");

        if let NamerError::Config { message, field } = err {
            assert_eq!(message, "Invalid value");
            assert_eq!(field, Some("filter.min_overall".to_string()));
        } else {
            panic!("Expected Config error");
        }
    }

    #[test]
    fn test_with_context_leaves_config_unchanged() {
        let err = NamerError::config("Bad config").with_context("ignored");

        if let NamerError::Config { message, .. } = err {
            assert_eq!(message, "Bad config");
        } else {
            panic!("Expected Config error");
        }
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<i32>("invalid json").unwrap_err();
        let err: NamerError = json_err.into();

        if let NamerError::Serialization { data_type, .. } = err {
            assert_eq!(data_type, Some("JSON".to_string()));
        } else {
            panic!("Expected Serialization error");
        }
    }

    #[test]
    fn test_from_yaml_error() {
        let yaml_err = serde_yaml::from_str::<i32>("invalid: yaml: content").unwrap_err();
        let err: NamerError = yaml_err.into();

        if let NamerError::Serialization { data_type, .. } = err {
            assert_eq!(data_type, Some("YAML".to_string()));
        } else {
            panic!("Expected Serialization error");
        }
    }

    #[test]
    fn test_error_display_formatting() {
        let err = NamerError::lexicon_industry("profile has no emotions", "saas");
        let display = format!("{}", err);
        assert!(display.contains("Lexicon error"));
        assert!(display.contains("profile has no emotions"));
    }
}
