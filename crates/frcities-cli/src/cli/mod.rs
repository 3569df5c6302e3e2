//! CLI for the French city gazetteer generator.

mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use frcities_core::config;
use std::path::PathBuf;

use commands::{run_generate, run_inspect, GenerateOverrides};

/// Top-level CLI: `frcities <RESOURCE_ID>` generates the dictionary.
#[derive(Debug, Parser)]
#[command(name = "frcities")]
#[command(about = "Build a sorted dictionary of French city names from data.gouv.fr", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// data.gouv.fr resource id of the municipalities CSV.
    pub resource_id: Option<String>,

    /// Output file (default from config: src/main/resources/fr_cities.txt).
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Endpoint the resource id is appended to.
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Abort the download after this many seconds (default: wait indefinitely).
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Summarize a generated dictionary (entry count, SHA-256).
    Inspect {
        /// Dictionary to read (default: configured output path).
        path: Option<PathBuf>,

        /// Also print the first N entries.
        #[arg(long, value_name = "N")]
        show: Option<usize>,
    },
}

impl Cli {
    /// No subcommand and no positional: only the usage line is printed.
    /// An explicitly empty id is present and fails later with InvalidArgument.
    pub fn missing_resource_id(&self) -> bool {
        self.command.is_none() && self.resource_id.is_none()
    }

    pub fn usage() -> String {
        Cli::command().render_usage().to_string()
    }

    pub fn run(self) -> Result<()> {
        if let Some(CliCommand::Inspect { path, show }) = self.command {
            let cfg = config::load_or_init()?;
            let path = path.unwrap_or(cfg.output_path);
            return run_inspect(&path, show);
        }

        let resource_id = self.resource_id.unwrap_or_default();
        let mut cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let overrides = GenerateOverrides {
            output: self.output,
            base_url: self.base_url,
            timeout_secs: self.timeout,
        };
        overrides.apply(&mut cfg)?;
        run_generate(cfg, &resource_id)
    }
}
