use thiserror::Error;

/// Which part of a proposition a parse error is about
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("could not find left concept")]
    MissingLeftConcept,

    #[error("could not find predicate")]
    MissingPredicate,

    #[error("could not find right concept")]
    MissingRightConcept,

    /// A lowercase word after the right concept has started
    #[error("encountered unexpected lower case word '{0}' outside of predicate")]
    UnexpectedLowercaseWord(String),

    /// The label is made only of characters the key normaliser drops
    #[error("concept '{0}' has an empty key")]
    EmptyConceptKey(String),
}

/// Error raised when a line of text is not a valid proposition
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} in proposition '{line}'{}", at_line_suffix(.line_number))]
pub struct ParseError {
    pub kind: ParseErrorKind,

    /// The offending line, as given
    pub line: String,

    /// 1-based line number within a multi-line block, when known
    pub line_number: Option<usize>,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, line: impl Into<String>) -> Self {
        Self {
            kind,
            line: line.into(),
            line_number: None,
        }
    }

    pub fn at_line(mut self, line_number: usize) -> Self {
        self.line_number = Some(line_number);
        self
    }

    /// Get the error code for this error
    pub fn code(&self) -> &'static str {
        match self.kind {
            ParseErrorKind::MissingLeftConcept => error_codes::MISSING_LEFT_CONCEPT,
            ParseErrorKind::MissingPredicate => error_codes::MISSING_PREDICATE,
            ParseErrorKind::MissingRightConcept => error_codes::MISSING_RIGHT_CONCEPT,
            ParseErrorKind::UnexpectedLowercaseWord(_) => error_codes::UNEXPECTED_LOWERCASE_WORD,
            ParseErrorKind::EmptyConceptKey(_) => error_codes::EMPTY_CONCEPT_KEY,
        }
    }
}

fn at_line_suffix(line_number: &Option<usize>) -> String {
    match line_number {
        Some(number) => format!(" (at line {})", number),
        None => String::new(),
    }
}

/// Parse error codes
pub mod error_codes {
    pub const MISSING_LEFT_CONCEPT: &str = "ERR_PARSE_MISSING_LEFT_CONCEPT";
    pub const MISSING_PREDICATE: &str = "ERR_PARSE_MISSING_PREDICATE";
    pub const MISSING_RIGHT_CONCEPT: &str = "ERR_PARSE_MISSING_RIGHT_CONCEPT";
    pub const UNEXPECTED_LOWERCASE_WORD: &str = "ERR_PARSE_UNEXPECTED_LOWERCASE_WORD";
    pub const EMPTY_CONCEPT_KEY: &str = "ERR_PARSE_EMPTY_CONCEPT_KEY";
}
