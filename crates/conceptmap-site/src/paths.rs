use std::path::{Path, PathBuf};

use conceptmap_core::{Concept, ConceptMap};
use conceptmap_diagrams::DiagramRequest;

/// Where each page and image of the site lives under the output directory
#[derive(Debug, Clone)]
pub struct FilePathHelper {
    base_dir: PathBuf,
}

impl FilePathHelper {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn index_markdown_file(&self) -> PathBuf {
        self.base_dir.join("index.md")
    }

    pub fn summary_markdown_file(&self, map: &ConceptMap) -> PathBuf {
        self.base_dir.join(map.slug()).join("summary.md")
    }

    pub fn detail_markdown_file(&self, map: &ConceptMap) -> PathBuf {
        self.base_dir.join(map.slug()).join("detail.md")
    }

    pub fn concept_markdown_file(&self, map: &ConceptMap, concept: &Concept) -> PathBuf {
        self.base_dir
            .join(map.slug())
            .join("concepts")
            .join(format!("{}.md", concept.key()))
    }

    /// `<slug>/images/<stem>.<extension>`
    pub fn image_file(&self, map: &ConceptMap, request: &DiagramRequest, extension: &str) -> PathBuf {
        self.base_dir
            .join(map.slug())
            .join("images")
            .join(image_file_name(map, request, extension))
    }
}

pub(crate) fn image_file_name(map: &ConceptMap, request: &DiagramRequest, extension: &str) -> String {
    format!("{}.{}", request.image_stem(map), extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use conceptmap_test_utils::builders::map;

    #[test]
    fn test_layout() {
        let map = map("Weather Today", "Rain causes Flooding");
        let rain = map.concept_by_label("Rain").unwrap();
        let paths = FilePathHelper::new("/site");

        assert_eq!(paths.index_markdown_file(), PathBuf::from("/site/index.md"));
        assert_eq!(
            paths.summary_markdown_file(&map),
            PathBuf::from("/site/weather-today/summary.md")
        );
        assert_eq!(
            paths.detail_markdown_file(&map),
            PathBuf::from("/site/weather-today/detail.md")
        );
        assert_eq!(
            paths.concept_markdown_file(&map, rain),
            PathBuf::from("/site/weather-today/concepts/rain.md")
        );
    }

    #[test]
    fn test_image_files() {
        let map = map("Weather", "Rain causes Flooding");
        let paths = FilePathHelper::new("out");

        assert_eq!(
            paths.image_file(&map, &DiagramRequest::Summary, "svg"),
            PathBuf::from("out/weather/images/weather-summary.svg")
        );
        assert_eq!(
            paths.image_file(&map, &DiagramRequest::Detail, "json"),
            PathBuf::from("out/weather/images/weather-detail.json")
        );
        assert_eq!(
            paths.image_file(&map, &DiagramRequest::SingleConcept { key: "rain".into() }, "d2"),
            PathBuf::from("out/weather/images/rain.d2")
        );
    }
}
