//! # Conceptmap Site
//!
//! Writes a browsable markdown site for a set of concept maps: an index, a
//! summary page (and a detail page when the map has key concepts) per map,
//! one page per concept, and the diagrams they embed.

mod error;
mod generator;
pub mod pages;
mod paths;

pub use error::SiteError;
pub use generator::{MarkdownSiteGenerator, SiteReport};
pub use paths::FilePathHelper;
