//! `frcities <resource_id>` – download the dataset and write the dictionary.

use anyhow::Result;
use frcities_core::config::GeneratorConfig;
use frcities_core::generator::{Generator, ProgressEvent, ProgressSink};
use std::path::PathBuf;

/// Command-line values that take precedence over config.toml.
#[derive(Debug, Default)]
pub struct GenerateOverrides {
    pub output: Option<PathBuf>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl GenerateOverrides {
    pub fn apply(self, cfg: &mut GeneratorConfig) -> Result<()> {
        if let Some(output) = self.output {
            cfg.output_path = output;
        }
        if let Some(base_url) = self.base_url {
            cfg.base_url = base_url;
        }
        if let Some(secs) = self.timeout_secs {
            cfg.http.timeout_secs = Some(secs);
        }
        cfg.validate()
    }
}

/// Prints each progress line to stdout.
struct StdoutProgress;

impl ProgressSink for StdoutProgress {
    fn report(&mut self, event: &ProgressEvent<'_>) {
        println!("{}", event);
    }
}

pub fn run_generate(cfg: GeneratorConfig, resource_id: &str) -> Result<()> {
    let output_path = cfg.output_path.clone();
    let generator = Generator::new(cfg)?;
    let summary = generator.run(resource_id, &output_path, &mut StdoutProgress)?;
    tracing::debug!("run summary: {:?}", summary);
    Ok(())
}
