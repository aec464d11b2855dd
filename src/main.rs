//! Conceptmapper CLI

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use conceptmap_diagrams::{BackendKind, Direction};
use conceptmapper::config::ENV_LOG;
use conceptmapper::{AppConfig, ConfigOverrides, ScriptSelection, View};

#[derive(Parser)]
#[command(name = "conceptmapper", version)]
#[command(about = "Build concept maps from propositions and publish them as markdown", long_about = None)]
struct Cli {
    /// YAML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the markdown site for every map in the input
    GenerateMarkdownSite {
        /// YAML file of concept maps, or - for stdin
        input: PathBuf,

        /// Output directory
        #[arg(long)]
        outdir: Option<PathBuf>,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Load and validate the input, printing a line per map
    Check {
        /// YAML file of concept maps, or - for stdin
        input: PathBuf,
    },

    /// Print the D2 script for one view of a map
    Script {
        /// YAML file of concept maps, or - for stdin
        input: PathBuf,

        /// Map title or slug
        #[arg(long)]
        map: Option<String>,

        /// Draw the propositions involving this concept
        #[arg(long)]
        concept: Option<String>,

        #[arg(long, value_enum, default_value_t = View::Summary)]
        view: View,

        #[command(flatten)]
        render: RenderArgs,
    },
}

#[derive(Args)]
struct RenderArgs {
    /// Layout direction (down, right)
    #[arg(long)]
    direction: Option<Direction>,

    /// Render backend (d2, d2-script, json)
    #[arg(long)]
    backend: Option<BackendKind>,

    /// Path to the d2 executable
    #[arg(long)]
    d2_binary: Option<PathBuf>,

    /// d2 layout engine
    #[arg(long)]
    d2_layout: Option<String>,

    /// Draw predicates in italics
    #[arg(long)]
    italic_predicates: bool,

    /// Link concept nodes to their pages under this base URL
    #[arg(long)]
    link_base: Option<String>,
}

impl RenderArgs {
    fn overrides(self, outdir: Option<PathBuf>, log_level: Option<String>) -> ConfigOverrides {
        ConfigOverrides {
            outdir,
            direction: self.direction,
            backend: self.backend,
            d2_binary: self.d2_binary,
            d2_layout: self.d2_layout,
            italic_predicates: self.italic_predicates.then_some(true),
            concept_link_base: self.link_base,
            log_level,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::from_file(cli.config.as_deref()).context("Failed to load configuration")?;

    // Tracing needs its filter before the environment is read, so invalid
    // values there can be reported.
    let filter = cli
        .log_level
        .clone()
        .or_else(|| std::env::var(ENV_LOG).ok())
        .unwrap_or_else(|| config.log_level.clone());
    conceptmapper::init_tracing(&filter);
    config.apply_env();

    match cli.command {
        Commands::GenerateMarkdownSite { input, outdir, render } => {
            config.apply_overrides(&render.overrides(outdir, cli.log_level));
            let report = conceptmapper::run_generate_site(&input, &config)?;
            info!(
                maps = report.maps,
                pages = report.pages.len(),
                diagrams = report.diagrams.len(),
                outdir = %config.outdir.display(),
                "Done"
            );
        }
        Commands::Check { input } => {
            for line in conceptmapper::run_check(&input)? {
                println!("{}", line);
            }
        }
        Commands::Script {
            input,
            map,
            concept,
            view,
            render,
        } => {
            config.apply_overrides(&render.overrides(None, cli.log_level));
            let selection = ScriptSelection { map, concept, view };
            print!("{}", conceptmapper::run_script(&input, &selection, &config)?);
        }
    }

    Ok(())
}
