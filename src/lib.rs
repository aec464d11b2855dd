//! # Conceptmapper
//!
//! Reads concept maps written as plain-text propositions and publishes them
//! as a markdown site with diagrams.

pub mod config;
pub mod pipeline;

pub use config::{AppConfig, ConfigError, ConfigOverrides};
pub use pipeline::{
    load_maps, run_check, run_generate_site, run_script, script_for, ScriptSelection, View,
};

/// Initialize tracing. `RUST_LOG` wins over `default_filter`. Output goes to
/// stderr so generated scripts can be piped from stdout.
pub fn init_tracing(default_filter: &str) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
