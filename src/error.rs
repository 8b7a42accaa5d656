use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong between reading the scan report and
/// writing the HTML. A missing input file is not in here: that case is
/// recovered by writing a placeholder page instead.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}")]
    MalformedInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
