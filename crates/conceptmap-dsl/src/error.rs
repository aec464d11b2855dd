use conceptmap_core::ParseError;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::validation::ValidationError;

/// All possible errors that can occur while loading concept map definitions
#[derive(Error, Debug)]
pub enum DslError {
    /// Errors that occur during YAML parsing
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// The definition file could not be read
    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A proposition in one of the maps failed to parse
    #[error("concept map '{title}': {source}")]
    Parse {
        title: String,
        #[source]
        source: ParseError,
    },

    /// A single validation error
    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationError),

    /// Multiple validation errors
    #[error("{}", MultipleErrorsFormat(.0))]
    MultipleValidationErrors(Vec<ValidationError>),

    /// Internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

// Helper struct to format multiple errors
struct MultipleErrorsFormat<'a>(&'a [ValidationError]);

impl fmt::Display for MultipleErrorsFormat<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Multiple validation errors ({} issues):", self.0.len())?;
        for (i, err) in self.0.iter().enumerate() {
            write!(f, "\n  {}. {}", i + 1, err)?;
        }
        Ok(())
    }
}

impl DslError {
    /// Create a DslError from one or more validation errors
    pub fn from_validation_errors(mut errors: Vec<ValidationError>) -> Self {
        if errors.len() > 1 {
            return DslError::MultipleValidationErrors(errors);
        }

        match errors.pop() {
            Some(err) => DslError::ValidationError(err),
            None => DslError::InternalError(
                "Called from_validation_errors with empty vector".to_string(),
            ),
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            DslError::YamlError(_) => "ERR_DSL_YAML_PARSE",
            DslError::Io { .. } => "ERR_DSL_IO",
            DslError::Parse { source, .. } => source.code(),
            DslError::ValidationError(err) => err.code,
            DslError::MultipleValidationErrors(_) => "ERR_DSL_VALIDATION_MULTIPLE",
            DslError::InternalError(_) => "ERR_DSL_INTERNAL",
        }
    }
}
