//! The generator pipeline: validate, fetch, parse, write.
//!
//! Linear and fail-fast. Any error moves the run to [`Stage::Failed`]; the
//! output file is only touched in the last stage, so an upstream failure
//! leaves a previous dictionary as it was.

use crate::checksum;
use crate::config::GeneratorConfig;
use crate::error::GeneratorError;
use crate::extract;
use crate::fetch;
use crate::output;
use std::fmt;
use std::path::{Path, PathBuf};

/// Pipeline position of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Validating,
    Fetching,
    Parsing,
    Writing,
    Done,
    Failed,
}

/// User-facing progress of a run. `Display` gives the console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent<'a> {
    /// Before the GET.
    Downloading { url: &'a str },
    /// After parsing; `count` is the size of the deduplicated set.
    Extracted { count: usize },
    /// After the output file is in place.
    Written { path: &'a Path },
}

impl fmt::Display for ProgressEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgressEvent::Downloading { url } => write!(f, "Download file from : {}", url),
            ProgressEvent::Extracted { count } => {
                write!(f, "{} cities extracted (duplicates removed).", count)
            }
            ProgressEvent::Written { path } => write!(f, "File generated : {}", path.display()),
        }
    }
}

/// Receives the progress lines of a run.
pub trait ProgressSink {
    fn report(&mut self, event: &ProgressEvent<'_>);
}

/// Collects the rendered lines; handy for tests and for callers that print later.
impl ProgressSink for Vec<String> {
    fn report(&mut self, event: &ProgressEvent<'_>) {
        self.push(event.to_string());
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub source_url: String,
    pub unique_names: usize,
    pub output_path: PathBuf,
    /// SHA-256 of the dictionary content.
    pub sha256: String,
}

pub struct Generator {
    config: GeneratorConfig,
    delimiter: u8,
}

impl Generator {
    /// Validates `config` first; a generator never runs with an unusable delimiter or base URL.
    pub fn new(config: GeneratorConfig) -> anyhow::Result<Self> {
        config.validate()?;
        let delimiter = config.delimiter_byte()?;
        Ok(Self { config, delimiter })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Download `base_url + resource_id`, extract unique city names and replace
    /// `output_path` with them, sorted, one per line.
    pub fn run(
        &self,
        resource_id: &str,
        output_path: &Path,
        progress: &mut dyn ProgressSink,
    ) -> Result<RunSummary, GeneratorError> {
        let mut stage = Stage::Validating;
        let result = self.run_stages(resource_id, output_path, progress, &mut stage);
        match &result {
            Ok(summary) => {
                enter(&mut stage, Stage::Done);
                tracing::info!(
                    "wrote {} names to {} (sha256 {})",
                    summary.unique_names,
                    summary.output_path.display(),
                    summary.sha256
                );
            }
            Err(e) => {
                tracing::error!("run failed during {:?}: {}", stage, e);
                enter(&mut stage, Stage::Failed);
            }
        }
        result
    }

    fn run_stages(
        &self,
        resource_id: &str,
        output_path: &Path,
        progress: &mut dyn ProgressSink,
        stage: &mut Stage,
    ) -> Result<RunSummary, GeneratorError> {
        tracing::debug!("stage {:?}", stage);
        if resource_id.is_empty() {
            return Err(GeneratorError::InvalidArgument(
                "you must provide a valid data.gouv.fr resource id".to_string(),
            ));
        }

        let source_url = self.config.source_url(resource_id);
        progress.report(&ProgressEvent::Downloading { url: &source_url });

        enter(stage, Stage::Fetching);
        let raw = fetch::fetch(&source_url, &self.config.http)?;

        enter(stage, Stage::Parsing);
        let text = extract::decode_body(&raw);
        let names = extract::extract_city_names(
            &text,
            self.delimiter,
            &self.config.name_columns,
        )?;
        progress.report(&ProgressEvent::Extracted { count: names.len() });

        enter(stage, Stage::Writing);
        let written = output::write_lines(output_path, &names)?;
        progress.report(&ProgressEvent::Written { path: output_path });

        Ok(RunSummary {
            source_url,
            unique_names: written,
            output_path: output_path.to_path_buf(),
            sha256: checksum::sha256_lines(&names),
        })
    }
}

fn enter(stage: &mut Stage, next: Stage) {
    tracing::debug!("stage {:?} -> {:?}", stage, next);
    *stage = next;
}
