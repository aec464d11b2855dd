use std::path::PathBuf;
use thiserror::Error;

use conceptmap_diagrams::DiagramError;

/// Errors raised while writing a site
#[derive(Error, Debug)]
pub enum SiteError {
    #[error("failed to write '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A diagram for one view of a map could not be produced
    #[error("diagram '{view}' of map '{map}' failed: {source}")]
    Diagram {
        map: String,
        view: String,
        #[source]
        source: DiagramError,
    },
}

impl SiteError {
    pub fn error_code(&self) -> &'static str {
        match self {
            SiteError::Io { .. } => "ERR_SITE_IO",
            SiteError::Diagram { .. } => "ERR_SITE_DIAGRAM",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagram_error_message() {
        let err = SiteError::Diagram {
            map: "Weather".into(),
            view: "concept snow".into(),
            source: DiagramError::UnknownConcept("snow".into()),
        };

        assert_eq!(err.error_code(), "ERR_SITE_DIAGRAM");
        assert_eq!(
            err.to_string(),
            "diagram 'concept snow' of map 'Weather' failed: concept 'snow' not found in map"
        );
    }
}
