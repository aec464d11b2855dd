use std::error::Error;
use std::fmt;

use crate::definition::ConceptMapDefinition;
use crate::error::DslError;

mod title;
mod unique_slug;

pub use title::TitleValidator;
pub use unique_slug::UniqueSlugValidator;

/// Represents a problem found in a set of concept map definitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code (should be a constant identifier)
    pub code: &'static str,

    /// Human-readable error message
    pub message: String,

    /// Optional path to the location of the error (e.g., "maps[1].title")
    pub path: Option<String>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(path) = &self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl Error for ValidationError {}

/// Validation error codes
pub mod error_codes {
    /// A map has no title
    pub const MISSING_TITLE: &str = "ERR_DSL_VALIDATION_MISSING_TITLE";

    /// A map title has no characters that survive normalisation
    pub const EMPTY_SLUG: &str = "ERR_DSL_VALIDATION_EMPTY_SLUG";

    /// Two maps share a slug and would overwrite each other's pages
    pub const DUPLICATE_SLUG: &str = "ERR_DSL_VALIDATION_DUPLICATE_SLUG";
}

/// A check over every definition in a stream
pub trait Validator {
    /// Validate the definitions and return a list of validation errors (if any)
    fn validate(&self, definitions: &[ConceptMapDefinition]) -> Vec<ValidationError>;
}

/// Run every validator over the definitions, collecting all of their errors
pub fn validate_definitions(definitions: &[ConceptMapDefinition]) -> Result<(), DslError> {
    let validators: Vec<Box<dyn Validator>> = vec![
        Box::new(TitleValidator::new()),
        Box::new(UniqueSlugValidator::new()),
    ];

    let errors: Vec<ValidationError> = validators
        .iter()
        .flat_map(|validator| validator.validate(definitions))
        .collect();

    if !errors.is_empty() {
        return Err(DslError::from_validation_errors(errors));
    }

    Ok(())
}

fn map_path(index: usize) -> String {
    format!("maps[{}]", index)
}
