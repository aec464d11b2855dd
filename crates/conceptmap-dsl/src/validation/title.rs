use crate::definition::ConceptMapDefinition;
use crate::validation::{error_codes, map_path, ValidationError, Validator};

/// Checks that every map has a title usable as a slug
#[derive(Debug, Default)]
pub struct TitleValidator;

impl TitleValidator {
    pub fn new() -> Self {
        TitleValidator
    }
}

impl Validator for TitleValidator {
    fn validate(&self, definitions: &[ConceptMapDefinition]) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        for (index, definition) in definitions.iter().enumerate() {
            let path = Some(format!("{}.title", map_path(index)));

            if definition.title.trim().is_empty() {
                errors.push(ValidationError {
                    code: error_codes::MISSING_TITLE,
                    message: "Concept map has no title".to_string(),
                    path,
                });
            } else if definition.slug().is_empty() {
                errors.push(ValidationError {
                    code: error_codes::EMPTY_SLUG,
                    message: format!("Title '{}' has no usable characters", definition.title),
                    path,
                });
            }
        }

        errors
    }
}
