use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use conceptmap_core::ConceptMap;
use conceptmap_diagrams::{diagram_requests, DiagramGenerator, DiagramRequest};

use crate::error::SiteError;
use crate::pages;
use crate::paths::{image_file_name, FilePathHelper};

/// What a site run wrote
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteReport {
    pub maps: usize,
    pub pages: Vec<PathBuf>,
    pub diagrams: Vec<PathBuf>,
}

/// Writes the markdown site for a set of concept maps.
///
/// The first failure stops the run; files already written are left in place.
pub struct MarkdownSiteGenerator<G: DiagramGenerator> {
    diagrams: G,
    paths: FilePathHelper,
}

impl<G: DiagramGenerator> MarkdownSiteGenerator<G> {
    pub fn new(diagrams: G, outdir: impl Into<PathBuf>) -> Self {
        Self {
            diagrams,
            paths: FilePathHelper::new(outdir),
        }
    }

    pub fn paths(&self) -> &FilePathHelper {
        &self.paths
    }

    pub fn diagrams(&self) -> &G {
        &self.diagrams
    }

    pub fn generate_site(&self, maps: &[ConceptMap]) -> Result<SiteReport, SiteError> {
        info!(
            maps = maps.len(),
            outdir = %self.paths.base_dir().display(),
            "Generating markdown site"
        );
        let mut report = SiteReport {
            maps: maps.len(),
            ..SiteReport::default()
        };

        let index = self.paths.index_markdown_file();
        write_page(&index, &pages::render_index_page(maps))?;
        report.pages.push(index);

        for map in maps {
            self.generate_map(map, &mut report)?;
        }

        info!(
            pages = report.pages.len(),
            diagrams = report.diagrams.len(),
            "Markdown site generated"
        );
        Ok(report)
    }

    fn generate_map(&self, map: &ConceptMap, report: &mut SiteReport) -> Result<(), SiteError> {
        debug!(map = %map.title(), concepts = map.concepts().len(), "Generating map pages");
        let extension = self.diagrams.file_extension().to_string();

        for request in diagram_requests(map) {
            let image = self.paths.image_file(map, &request, &extension);
            self.diagrams
                .generate(map, &request, &image)
                .map_err(|source| SiteError::Diagram {
                    map: map.title().to_string(),
                    view: request.to_string(),
                    source,
                })?;
            report.diagrams.push(image);

            let file_name = image_file_name(map, &request, &extension);
            let (page, markdown) = match &request {
                DiagramRequest::Summary => (
                    self.paths.summary_markdown_file(map),
                    pages::render_summary_page(map, &format!("images/{}", file_name)),
                ),
                DiagramRequest::Detail => (
                    self.paths.detail_markdown_file(map),
                    pages::render_detail_page(map, &format!("images/{}", file_name)),
                ),
                DiagramRequest::SingleConcept { key } => {
                    let Some(concept) = map.concept_by_key(key) else {
                        continue;
                    };
                    (
                        self.paths.concept_markdown_file(map, concept),
                        pages::render_concept_page(map, concept, &format!("../images/{}", file_name)),
                    )
                }
            };
            write_page(&page, &markdown)?;
            report.pages.push(page);
        }

        Ok(())
    }
}

fn write_page(path: &Path, markdown: &str) -> Result<(), SiteError> {
    let io_error = |source| SiteError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    fs::write(path, markdown).map_err(io_error)?;
    debug!(path = %path.display(), "Wrote page");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use conceptmap_diagrams::DiagramError;
    use conceptmap_test_utils::builders::{map_with_key_concepts, weather_map};
    use conceptmap_test_utils::{MockDiagramGenerator, RecordingDiagramGenerator};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_site_layout() {
        let dir = tempfile::tempdir().unwrap();
        let generator = MarkdownSiteGenerator::new(RecordingDiagramGenerator::new(), dir.path());

        let report = generator.generate_site(&[weather_map()]).unwrap();

        let relative: Vec<String> = report
            .pages
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().display().to_string())
            .collect();
        assert_eq!(
            relative,
            vec![
                "index.md",
                "weather/summary.md",
                "weather/concepts/rain.md",
                "weather/concepts/flooding.md",
                "weather/concepts/erosion.md",
                "weather/concepts/houses.md",
            ]
        );
        assert_eq!(report.diagrams.len(), 5);
        assert!(dir.path().join("weather/images/weather-summary.svg").is_file());
        assert!(dir.path().join("weather/images/houses.svg").is_file());
        assert!(!dir.path().join("weather/detail.md").exists());
    }

    #[test]
    fn test_detail_page_only_with_key_concepts() {
        let dir = tempfile::tempdir().unwrap();
        let generator = MarkdownSiteGenerator::new(RecordingDiagramGenerator::new(), dir.path());
        let map = map_with_key_concepts("Weather", "Rain causes Flooding", &["Rain"]);

        generator.generate_site(&[map]).unwrap();

        let detail = fs::read_to_string(dir.path().join("weather/detail.md")).unwrap();
        assert!(detail.contains("![Weather](images/weather-detail.svg)"));
        assert_eq!(generator.diagrams().calls()[1].request, DiagramRequest::Detail);
    }

    #[test]
    fn test_concept_page_links_image_relative_to_page() {
        let dir = tempfile::tempdir().unwrap();
        let generator = MarkdownSiteGenerator::new(RecordingDiagramGenerator::new(), dir.path());

        generator.generate_site(&[weather_map()]).unwrap();

        let page = fs::read_to_string(dir.path().join("weather/concepts/rain.md")).unwrap();
        assert!(page.contains("![Rain](../images/rain.svg)"));
        assert!(page.contains("[Weather](../summary.md)"));
    }

    #[test]
    fn test_diagram_failure_stops_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let mut diagrams = MockDiagramGenerator::new();
        diagrams.expect_file_extension().return_const("png".to_string());
        diagrams
            .expect_generate()
            .withf(|_, request, _| *request == DiagramRequest::Summary)
            .times(1)
            .returning(|_, _, _| Ok(()));
        diagrams
            .expect_generate()
            .withf(|_, request, _| *request == DiagramRequest::SingleConcept { key: "rain".into() })
            .times(1)
            .returning(|_, _, _| Err(DiagramError::UnknownConcept("rain".into())));

        let generator = MarkdownSiteGenerator::new(diagrams, dir.path());
        let err = generator.generate_site(&[weather_map()]).unwrap_err();

        assert_eq!(err.error_code(), "ERR_SITE_DIAGRAM");
        assert!(dir.path().join("weather/summary.md").is_file());
        assert!(!dir.path().join("weather/concepts/rain.md").exists());
    }

    #[test]
    fn test_unwritable_outdir() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("site");
        fs::write(&blocker, "not a directory").unwrap();
        let generator = MarkdownSiteGenerator::new(RecordingDiagramGenerator::new(), &blocker);

        let err = generator.generate_site(&[weather_map()]).unwrap_err();
        assert_eq!(err.error_code(), "ERR_SITE_IO");
    }
}
