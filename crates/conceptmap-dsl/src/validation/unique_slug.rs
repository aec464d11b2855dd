use std::collections::HashMap;

use crate::definition::ConceptMapDefinition;
use crate::validation::{error_codes, map_path, ValidationError, Validator};

/// Checks that no two maps would be written to the same directory
#[derive(Debug, Default)]
pub struct UniqueSlugValidator;

impl UniqueSlugValidator {
    pub fn new() -> Self {
        UniqueSlugValidator
    }
}

impl Validator for UniqueSlugValidator {
    fn validate(&self, definitions: &[ConceptMapDefinition]) -> Vec<ValidationError> {
        let mut first_seen: HashMap<String, usize> = HashMap::with_capacity(definitions.len());
        let mut errors = Vec::new();

        for (index, definition) in definitions.iter().enumerate() {
            let slug = definition.slug();
            // Empty slugs are reported by the title validator
            if slug.is_empty() {
                continue;
            }

            if let Some(first) = first_seen.get(&slug) {
                errors.push(ValidationError {
                    code: error_codes::DUPLICATE_SLUG,
                    message: format!(
                        "Duplicate map slug '{}': '{}' clashes with '{}'",
                        slug, definition.title, definitions[*first].title
                    ),
                    path: Some(format!("{}.title", map_path(index))),
                });
            } else {
                first_seen.insert(slug, index);
            }
        }

        errors
    }
}
