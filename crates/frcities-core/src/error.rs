//! Error kinds surfaced by a generator run.

use std::path::PathBuf;
use thiserror::Error;

/// Failure of one generator run. None of these are retried; each aborts the run.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Resource identifier missing or empty. Detected before any network activity.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Server answered with a non-2xx status.
    #[error("GET {url} returned HTTP {status}")]
    Http { url: String, status: u32 },

    /// Connection-level failure (DNS, refused, reset, timeout).
    #[error("GET {url} failed")]
    Network {
        url: String,
        #[source]
        source: curl::Error,
    },

    /// The body could not be read as delimiter-separated records.
    #[error("malformed CSV data")]
    Csv(#[from] csv::Error),

    /// Writing or finalizing the output file failed.
    #[error("failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GeneratorError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GeneratorError::Io {
            path: path.into(),
            source,
        }
    }
}
