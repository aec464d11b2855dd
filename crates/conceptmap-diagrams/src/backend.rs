//! Render backends: what a graph IR finally turns into.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::str::FromStr;
use tracing::debug;

use crate::d2::emit_script;
use crate::error::{RenderError, UnknownOption};
use crate::ir::GraphIr;

/// Turns a graph into the bytes of an image or script file
pub trait RenderBackend {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Extension of the files this backend produces, without the dot
    fn file_extension(&self) -> &'static str;

    fn render(&self, ir: &GraphIr) -> Result<Vec<u8>, RenderError>;
}

/// Pipes the D2 script through the `d2` binary and returns SVG
#[derive(Debug, Clone)]
pub struct D2CliBackend {
    binary: PathBuf,
    layout: Option<String>,
}

impl D2CliBackend {
    pub fn new(binary: impl Into<PathBuf>, layout: Option<String>) -> Self {
        Self {
            binary: binary.into(),
            layout,
        }
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.binary);
        if let Some(layout) = &self.layout {
            command.arg("--layout").arg(layout);
        }
        // Read the script from stdin, write the SVG to stdout
        command
            .arg("-")
            .arg("-")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        command
    }
}

impl RenderBackend for D2CliBackend {
    fn name(&self) -> &'static str {
        "d2"
    }

    fn file_extension(&self) -> &'static str {
        "svg"
    }

    fn render(&self, ir: &GraphIr) -> Result<Vec<u8>, RenderError> {
        let script = emit_script(ir)?;
        let spawn_error = |source| RenderError::Spawn {
            binary: self.binary.clone(),
            source,
        };

        debug!(binary = %self.binary.display(), bytes = script.len(), "Running d2");
        let mut child = self.command().spawn().map_err(spawn_error)?;

        // A renderer that exits early breaks the pipe; its exit status and
        // stderr say more than the write error does.
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(script.as_bytes()),
            None => Ok(()),
        };

        let output = child.wait_with_output().map_err(spawn_error)?;
        if !output.status.success() {
            return Err(RenderError::Failed {
                binary: self.binary.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        written.map_err(spawn_error)?;

        Ok(output.stdout)
    }
}

/// Returns the D2 script itself
#[derive(Debug, Clone, Default)]
pub struct D2ScriptBackend;

impl RenderBackend for D2ScriptBackend {
    fn name(&self) -> &'static str {
        "d2-script"
    }

    fn file_extension(&self) -> &'static str {
        "d2"
    }

    fn render(&self, ir: &GraphIr) -> Result<Vec<u8>, RenderError> {
        Ok(emit_script(ir)?.into_bytes())
    }
}

/// Returns the graph serialized as pretty JSON
#[derive(Debug, Clone, Default)]
pub struct JsonBackend;

impl RenderBackend for JsonBackend {
    fn name(&self) -> &'static str {
        "json"
    }

    fn file_extension(&self) -> &'static str {
        "json"
    }

    fn render(&self, ir: &GraphIr) -> Result<Vec<u8>, RenderError> {
        Ok(serde_json::to_vec_pretty(ir)?)
    }
}

/// The available backends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackendKind {
    #[default]
    D2,
    D2Script,
    Json,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::D2 => "d2",
            BackendKind::D2Script => "d2-script",
            BackendKind::Json => "json",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "d2" => Ok(BackendKind::D2),
            "d2-script" => Ok(BackendKind::D2Script),
            "json" => Ok(BackendKind::Json),
            _ => Err(UnknownOption::new("backend", s, &["d2", "d2-script", "json"])),
        }
    }
}

/// Settings for backends that call out to an external program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendOptions {
    pub d2_binary: PathBuf,
    pub d2_layout: Option<String>,
}

impl Default for BackendOptions {
    fn default() -> Self {
        Self {
            d2_binary: PathBuf::from("d2"),
            d2_layout: None,
        }
    }
}

/// Create the backend for `kind`
pub fn create_backend(kind: BackendKind, options: &BackendOptions) -> Box<dyn RenderBackend> {
    match kind {
        BackendKind::D2 => Box::new(D2CliBackend::new(
            options.d2_binary.clone(),
            options.d2_layout.clone(),
        )),
        BackendKind::D2Script => Box::new(D2ScriptBackend),
        BackendKind::Json => Box::new(JsonBackend),
    }
}
