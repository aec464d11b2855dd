//! The operations behind each subcommand.

use anyhow::{anyhow, bail, Context, Result};
use std::io;
use std::path::Path;
use tracing::{debug, info};

use conceptmap_core::ConceptMap;
use conceptmap_diagrams::{
    create_backend, BackendDiagramGenerator, D2ScriptBackend, DiagramRequest, GraphSynthesizer,
    RenderBackend,
};
use conceptmap_site::{MarkdownSiteGenerator, SiteReport};

use crate::config::AppConfig;

/// Map view printed by `script` when no concept is given
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum View {
    #[default]
    Summary,
    Detail,
}

/// Which diagram `script` prints
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptSelection {
    /// Title or slug; may be omitted when the input holds a single map
    pub map: Option<String>,
    /// Concept label; selects the single-concept view
    pub concept: Option<String>,
    pub view: View,
}

/// Load every map from `input`, or from stdin when `input` is `-`
pub fn load_maps(input: &Path) -> Result<Vec<ConceptMap>> {
    let maps = if input == Path::new("-") {
        conceptmap_dsl::load_from_yaml_reader(io::stdin().lock())
            .context("Failed to load concept maps from stdin")?
    } else {
        conceptmap_dsl::load_from_yaml_file(input)
            .with_context(|| format!("Failed to load concept maps from {}", input.display()))?
    };

    info!(maps = maps.len(), input = %input.display(), "Loaded concept maps");
    Ok(maps)
}

/// Diagram generator configured from `config`, drawing with `backend`
pub fn diagram_generator(config: &AppConfig, backend: Box<dyn RenderBackend>) -> BackendDiagramGenerator {
    let generator = BackendDiagramGenerator::new(GraphSynthesizer::new(config.synthesis_options()), backend);
    match &config.concept_link_base {
        Some(base) => generator.with_concept_links(base.clone()),
        None => generator,
    }
}

pub fn run_generate_site(input: &Path, config: &AppConfig) -> Result<SiteReport> {
    let maps = load_maps(input)?;
    let backend = create_backend(config.backend, &config.backend_options());
    let generator = MarkdownSiteGenerator::new(diagram_generator(config, backend), &config.outdir);
    debug!(backend = generator.diagrams().backend_name(), "Using render backend");

    generator
        .generate_site(&maps)
        .with_context(|| format!("Failed to generate site in {}", config.outdir.display()))
}

/// One summary line per map in `input`
pub fn run_check(input: &Path) -> Result<Vec<String>> {
    let maps = load_maps(input)?;
    Ok(maps.iter().map(describe_map).collect())
}

fn describe_map(map: &ConceptMap) -> String {
    format!(
        "{} ({}): {} concepts, {} propositions, {} key concepts",
        map.title(),
        map.slug(),
        map.concepts().len(),
        map.proposition_count(),
        map.key_concepts().len()
    )
}

/// The D2 script for one view of one map in `input`
pub fn run_script(input: &Path, selection: &ScriptSelection, config: &AppConfig) -> Result<String> {
    let maps = load_maps(input)?;
    script_for(&maps, selection, config)
}

pub fn script_for(maps: &[ConceptMap], selection: &ScriptSelection, config: &AppConfig) -> Result<String> {
    let map = select_map(maps, selection.map.as_deref())?;

    let request = match &selection.concept {
        Some(label) => {
            let concept = map
                .concept_by_label(label)
                .ok_or_else(|| anyhow!("Concept '{}' not found in map '{}'", label, map.title()))?;
            DiagramRequest::single_concept(concept)
        }
        None => match selection.view {
            View::Summary => DiagramRequest::Summary,
            View::Detail => DiagramRequest::Detail,
        },
    };

    let generator = diagram_generator(config, Box::new(D2ScriptBackend));
    let bytes = generator
        .render(map, &request)
        .with_context(|| format!("Failed to draw {} of map '{}'", request, map.title()))?;

    String::from_utf8(bytes).context("Script is not valid UTF-8")
}

fn select_map<'m>(maps: &'m [ConceptMap], wanted: Option<&str>) -> Result<&'m ConceptMap> {
    match wanted {
        Some(wanted) => {
            let slug = conceptmap_core::normalize(wanted);
            maps.iter()
                .find(|m| m.title() == wanted || m.slug() == slug)
                .ok_or_else(|| anyhow!("No concept map titled '{}'", wanted))
        }
        None => match maps {
            [map] => Ok(map),
            [] => bail!("The input holds no concept maps"),
            _ => {
                let titles: Vec<&str> = maps.iter().map(|m| m.title()).collect();
                bail!(
                    "The input holds {} concept maps, choose one with --map: {}",
                    maps.len(),
                    titles.join(", ")
                )
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conceptmap_test_utils::builders::{map, map_with_key_concepts};
    use pretty_assertions::assert_eq;

    fn maps() -> Vec<ConceptMap> {
        vec![
            map_with_key_concepts("Weather Today", "Rain causes Flooding\nSun causes Drought", &["Rain"]),
            map("Animals", "Dog is a Mammal"),
        ]
    }

    #[test]
    fn test_select_map_by_title_or_slug() {
        let maps = maps();
        assert_eq!(select_map(&maps, Some("Weather Today")).unwrap().title(), "Weather Today");
        assert_eq!(select_map(&maps, Some("weather-today")).unwrap().title(), "Weather Today");
        assert!(select_map(&maps, Some("Plants")).is_err());
    }

    #[test]
    fn test_select_map_requires_choice_when_ambiguous() {
        let maps = maps();
        let err = select_map(&maps, None).unwrap_err();
        assert!(err.to_string().contains("Weather Today, Animals"));
        assert_eq!(select_map(&maps[1..], None).unwrap().title(), "Animals");
    }

    #[test]
    fn test_script_views() {
        let maps = maps();
        let config = AppConfig::default();

        let summary = script_for(
            &maps,
            &ScriptSelection {
                map: Some("weather-today".into()),
                ..ScriptSelection::default()
            },
            &config,
        )
        .unwrap();
        assert!(!summary.contains("c-rain ->"));

        let detail = script_for(
            &maps,
            &ScriptSelection {
                map: Some("weather-today".into()),
                view: View::Detail,
                ..ScriptSelection::default()
            },
            &config,
        )
        .unwrap();
        assert!(detail.contains("c-rain -> p-rain-causes"));
        assert!(detail.contains("c-sun -> p-sun-causes"));

        let concept = script_for(
            &maps,
            &ScriptSelection {
                map: Some("Animals".into()),
                concept: Some("Dog".into()),
                ..ScriptSelection::default()
            },
            &config,
        )
        .unwrap();
        assert!(concept.contains("c-dog -> p-dog-is-a"));
    }

    #[test]
    fn test_unknown_concept() {
        let err = script_for(
            &maps(),
            &ScriptSelection {
                map: Some("Animals".into()),
                concept: Some("Cat".into()),
                ..ScriptSelection::default()
            },
            &AppConfig::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("Concept 'Cat' not found"));
    }

    #[test]
    fn test_describe_map() {
        assert_eq!(
            describe_map(&maps()[0]),
            "Weather Today (weather-today): 4 concepts, 2 propositions, 1 key concepts"
        );
    }
}
