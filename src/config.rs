//! Configuration for the conceptmapper binary
//!
//! Values come from defaults, then an optional YAML file, then
//! `CONCEPTMAPPER_*` environment variables, then command-line flags.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

use conceptmap_diagrams::{BackendKind, BackendOptions, Direction, SynthesisOptions};

pub const ENV_OUTDIR: &str = "CONCEPTMAPPER_OUTDIR";
pub const ENV_DIRECTION: &str = "CONCEPTMAPPER_DIRECTION";
pub const ENV_BACKEND: &str = "CONCEPTMAPPER_BACKEND";
pub const ENV_D2_BIN: &str = "CONCEPTMAPPER_D2_BIN";
pub const ENV_D2_LAYOUT: &str = "CONCEPTMAPPER_D2_LAYOUT";
pub const ENV_ITALIC_PREDICATES: &str = "CONCEPTMAPPER_ITALIC_PREDICATES";
pub const ENV_LINK_BASE: &str = "CONCEPTMAPPER_LINK_BASE";
pub const ENV_LOG: &str = "CONCEPTMAPPER_LOG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{}': {source}", .path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl ConfigError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::Io { .. } => "ERR_CONFIG_IO",
            ConfigError::Yaml { .. } => "ERR_CONFIG_YAML",
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Directory the markdown site is written to
    #[serde(default = "default_outdir")]
    pub outdir: PathBuf,

    /// Layout direction of every diagram
    #[serde(default)]
    pub direction: Direction,

    /// Which renderer draws the diagrams
    #[serde(default)]
    pub backend: BackendKind,

    /// Path to the d2 executable
    #[serde(default = "default_d2_binary")]
    pub d2_binary: PathBuf,

    /// d2 layout engine, left to d2 when unset
    #[serde(default)]
    pub d2_layout: Option<String>,

    #[serde(default)]
    pub italic_predicates: bool,

    /// When set, concept nodes link to `<base>/<map slug>/concepts/<key>.md`
    #[serde(default)]
    pub concept_link_base: Option<String>,

    /// Tracing filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_outdir() -> PathBuf {
    PathBuf::from("site")
}

fn default_d2_binary() -> PathBuf {
    PathBuf::from("d2")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            outdir: default_outdir(),
            direction: Direction::default(),
            backend: BackendKind::default(),
            d2_binary: default_d2_binary(),
            d2_layout: None,
            italic_predicates: false,
            concept_link_base: None,
            log_level: default_log_level(),
        }
    }
}

/// Values given on the command line. `None` leaves the loaded value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub outdir: Option<PathBuf>,
    pub direction: Option<Direction>,
    pub backend: Option<BackendKind>,
    pub d2_binary: Option<PathBuf>,
    pub d2_layout: Option<String>,
    pub italic_predicates: Option<bool>,
    pub concept_link_base: Option<String>,
    pub log_level: Option<String>,
}

impl AppConfig {
    /// Defaults, overlaid with `path` when given
    pub fn from_file(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if text.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&text).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn apply_env(&mut self) {
        self.apply_env_from(|name| env::var(name).ok());
    }

    /// Override from `CONCEPTMAPPER_*` variables found by `lookup`. Invalid
    /// values are logged and ignored.
    pub fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(outdir) = lookup(ENV_OUTDIR) {
            self.outdir = PathBuf::from(outdir);
        }

        if let Some(direction) = lookup(ENV_DIRECTION) {
            match direction.parse() {
                Ok(direction) => self.direction = direction,
                Err(e) => warn!("Invalid {} value: {}", ENV_DIRECTION, e),
            }
        }

        if let Some(backend) = lookup(ENV_BACKEND) {
            match backend.parse() {
                Ok(backend) => self.backend = backend,
                Err(e) => warn!("Invalid {} value: {}", ENV_BACKEND, e),
            }
        }

        if let Some(d2_binary) = lookup(ENV_D2_BIN) {
            self.d2_binary = PathBuf::from(d2_binary);
        }

        if let Some(layout) = lookup(ENV_D2_LAYOUT) {
            self.d2_layout = Some(layout).filter(|l| !l.trim().is_empty());
        }

        if let Some(italic) = lookup(ENV_ITALIC_PREDICATES) {
            match italic.trim().to_lowercase().as_str() {
                "true" | "1" | "yes" => self.italic_predicates = true,
                "false" | "0" | "no" => self.italic_predicates = false,
                _ => warn!("Invalid {} value: {}", ENV_ITALIC_PREDICATES, italic),
            }
        }

        if let Some(base) = lookup(ENV_LINK_BASE) {
            self.concept_link_base = Some(base).filter(|b| !b.trim().is_empty());
        }

        if let Some(log_level) = lookup(ENV_LOG) {
            self.log_level = log_level;
        }
    }

    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        let o = overrides.clone();
        if let Some(outdir) = o.outdir {
            self.outdir = outdir;
        }
        if let Some(direction) = o.direction {
            self.direction = direction;
        }
        if let Some(backend) = o.backend {
            self.backend = backend;
        }
        if let Some(d2_binary) = o.d2_binary {
            self.d2_binary = d2_binary;
        }
        if o.d2_layout.is_some() {
            self.d2_layout = o.d2_layout;
        }
        if let Some(italic) = o.italic_predicates {
            self.italic_predicates = italic;
        }
        if o.concept_link_base.is_some() {
            self.concept_link_base = o.concept_link_base;
        }
        if let Some(log_level) = o.log_level {
            self.log_level = log_level;
        }
    }

    pub fn synthesis_options(&self) -> SynthesisOptions {
        SynthesisOptions {
            direction: self.direction,
            italic_predicates: self.italic_predicates,
        }
    }

    pub fn backend_options(&self) -> BackendOptions {
        BackendOptions {
            d2_binary: self.d2_binary.clone(),
            d2_layout: self.d2_layout.clone(),
        }
    }
}
