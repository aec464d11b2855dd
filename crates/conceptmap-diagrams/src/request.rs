use std::fmt;

use conceptmap_core::{Concept, ConceptMap, PropositionRef};

use crate::error::DiagramError;
use crate::modifiers::GraphModifier;

/// A view of a concept map to draw
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DiagramRequest {
    /// Propositions joining key concepts, or every proposition when the map
    /// has no key concepts
    Summary,
    /// Every proposition
    Detail,
    /// Propositions involving one concept, with that concept emphasised
    SingleConcept { key: String },
}

impl DiagramRequest {
    pub fn single_concept(concept: &Concept) -> Self {
        DiagramRequest::SingleConcept { key: concept.key() }
    }

    pub fn propositions<'m>(&self, map: &'m ConceptMap) -> Result<Vec<PropositionRef<'m>>, DiagramError> {
        match self {
            DiagramRequest::Summary => Ok(map.summary_propositions()),
            DiagramRequest::Detail => Ok(map.propositions()),
            DiagramRequest::SingleConcept { key } => {
                let concept = focus(map, key)?;
                Ok(map.propositions_involving(&[concept]))
            }
        }
    }

    pub fn modifiers(&self, map: &ConceptMap) -> Result<Vec<GraphModifier>, DiagramError> {
        match self {
            DiagramRequest::Summary | DiagramRequest::Detail => Ok(Vec::new()),
            DiagramRequest::SingleConcept { key } => {
                let concept = focus(map, key)?;
                Ok(vec![
                    GraphModifier::EnsureConcept {
                        key: key.clone(),
                        label: concept.label.clone(),
                    },
                    GraphModifier::Emphasise { key: key.clone() },
                ])
            }
        }
    }

    /// File name of the image, without extension
    pub fn image_stem(&self, map: &ConceptMap) -> String {
        match self {
            DiagramRequest::Summary => format!("{}-summary", map.slug()),
            DiagramRequest::Detail => format!("{}-detail", map.slug()),
            DiagramRequest::SingleConcept { key } => key.clone(),
        }
    }
}

impl fmt::Display for DiagramRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagramRequest::Summary => f.write_str("summary"),
            DiagramRequest::Detail => f.write_str("detail"),
            DiagramRequest::SingleConcept { key } => write!(f, "concept {}", key),
        }
    }
}

fn focus<'m>(map: &'m ConceptMap, key: &str) -> Result<&'m Concept, DiagramError> {
    map.concept_by_key(key)
        .ok_or_else(|| DiagramError::UnknownConcept(key.to_string()))
}

/// Every diagram a map needs: the summary, the detail view when the map has
/// key concepts, and one per concept.
pub fn diagram_requests(map: &ConceptMap) -> Vec<DiagramRequest> {
    let mut requests = vec![DiagramRequest::Summary];
    if map.has_key_concepts() {
        requests.push(DiagramRequest::Detail);
    }
    requests.extend(map.concepts().iter().map(DiagramRequest::single_concept));
    requests
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn weather(key_concept: Option<&str>) -> ConceptMap {
        let mut builder = ConceptMap::builder("Weather Today")
            .propositions("Rain causes Flooding\nFlooding damages Houses\nSun causes Drought")
            .unwrap();
        if let Some(label) = key_concept {
            builder.mark_key_concept(label);
        }
        builder.build()
    }

    #[test]
    fn test_requests_without_key_concepts() {
        let requests = diagram_requests(&weather(None));
        let names: Vec<String> = requests.iter().map(|r| r.to_string()).collect();

        assert_eq!(
            names,
            vec![
                "summary",
                "concept rain",
                "concept flooding",
                "concept houses",
                "concept sun",
                "concept drought",
            ]
        );
    }

    #[test]
    fn test_requests_with_key_concepts_include_detail() {
        let requests = diagram_requests(&weather(Some("Rain")));
        assert_eq!(requests[0], DiagramRequest::Summary);
        assert_eq!(requests[1], DiagramRequest::Detail);
        assert_eq!(requests.len(), 7);
    }

    #[test]
    fn test_single_concept_view() {
        let map = weather(None);
        let request = DiagramRequest::SingleConcept { key: "flooding".into() };

        let lines: Vec<String> = request
            .propositions(&map)
            .unwrap()
            .iter()
            .map(|p| p.to_string())
            .collect();
        assert_eq!(lines, vec!["Rain causes Flooding", "Flooding damages Houses"]);

        let modifiers = request.modifiers(&map).unwrap();
        assert_eq!(modifiers[1], GraphModifier::Emphasise { key: "flooding".into() });
        assert_eq!(request.image_stem(&map), "flooding");
    }

    #[test]
    fn test_summary_and_detail_stems() {
        let map = weather(None);
        assert_eq!(DiagramRequest::Summary.image_stem(&map), "weather-today-summary");
        assert_eq!(DiagramRequest::Detail.image_stem(&map), "weather-today-detail");
    }

    #[test]
    fn test_unknown_concept() {
        let map = weather(None);
        let request = DiagramRequest::SingleConcept { key: "snow".into() };

        let err = request.propositions(&map).unwrap_err();
        assert_eq!(err.error_code(), "ERR_DIAGRAM_UNKNOWN_CONCEPT");
    }
}
