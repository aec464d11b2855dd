use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while emitting a script from a graph IR
#[derive(Error, Debug)]
pub enum SynthesisError {
    /// The id cannot be written as a diagram identifier
    #[error("malformed diagram identifier '{0}'")]
    MalformedIdentifier(String),
}

impl SynthesisError {
    pub fn error_code(&self) -> &'static str {
        match self {
            SynthesisError::MalformedIdentifier(_) => "ERR_DIAGRAM_MALFORMED_IDENTIFIER",
        }
    }
}

/// Errors raised by a render backend
#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    Script(#[from] SynthesisError),

    /// The renderer process could not be started or talked to
    #[error("failed to run '{}': {source}", .binary.display())]
    Spawn {
        binary: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The renderer process exited unsuccessfully; stderr is passed on as is
    #[error("'{}' exited with {status}: {stderr}", .binary.display())]
    Failed {
        binary: PathBuf,
        status: String,
        stderr: String,
    },

    #[error("failed to serialize graph: {0}")]
    Json(#[from] serde_json::Error),
}

impl RenderError {
    pub fn error_code(&self) -> &'static str {
        match self {
            RenderError::Script(err) => err.error_code(),
            RenderError::Spawn { .. } => "ERR_RENDER_SPAWN",
            RenderError::Failed { .. } => "ERR_RENDER_FAILED",
            RenderError::Json(_) => "ERR_RENDER_JSON",
        }
    }
}

/// Errors raised while producing a diagram file
#[derive(Error, Debug)]
pub enum DiagramError {
    #[error("diagram rendering failed: {0}")]
    Render(#[from] RenderError),

    /// The request names a concept the map does not have
    #[error("concept '{0}' not found in map")]
    UnknownConcept(String),

    #[error("failed to write diagram '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DiagramError {
    pub fn error_code(&self) -> &'static str {
        match self {
            DiagramError::Render(err) => err.error_code(),
            DiagramError::UnknownConcept(_) => "ERR_DIAGRAM_UNKNOWN_CONCEPT",
            DiagramError::Io { .. } => "ERR_DIAGRAM_IO",
        }
    }
}

/// A setting was given a value outside its fixed set of choices
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {setting} '{value}', expected one of: {}", .expected.join(", "))]
pub struct UnknownOption {
    pub setting: &'static str,
    pub value: String,
    pub expected: &'static [&'static str],
}

impl UnknownOption {
    pub fn new(setting: &'static str, value: &str, expected: &'static [&'static str]) -> Self {
        Self {
            setting,
            value: value.to_string(),
            expected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_pass_through_wrappers() {
        let err = DiagramError::from(RenderError::from(SynthesisError::MalformedIdentifier(
            "a b".to_string(),
        )));
        assert_eq!(err.error_code(), "ERR_DIAGRAM_MALFORMED_IDENTIFIER");
    }

    #[test]
    fn test_failed_render_keeps_stderr() {
        let err = RenderError::Failed {
            binary: PathBuf::from("d2"),
            status: "exit status: 1".to_string(),
            stderr: "err: failed to compile".to_string(),
        };
        assert_eq!(err.to_string(), "'d2' exited with exit status: 1: err: failed to compile");
    }

    #[test]
    fn test_unknown_option_lists_choices() {
        let err = UnknownOption::new("direction", "up", &["down", "right"]);
        assert_eq!(err.to_string(), "unknown direction 'up', expected one of: down, right");
    }
}
