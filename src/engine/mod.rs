pub mod normalize;

use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::document::ScanDocument;
use crate::error::ReportError;
use crate::report::html;
use crate::report::row::SeverityTotals;

/// What a pipeline run produced, for callers that want to summarize it.
#[derive(Debug, Clone)]
pub struct RenderOutcome {
    /// True when the input was missing and the placeholder page was
    /// written instead of a real report.
    pub placeholder: bool,
    pub row_count: usize,
    pub totals: SeverityTotals,
}

/// Run the full pipeline: load the scan report, normalize it, render the
/// HTML page, and write it to `output`.
///
/// A missing input file is not an error: the placeholder page is written
/// and the outcome is flagged accordingly.
pub fn run(input: &Path, output: &Path) -> Result<RenderOutcome, ReportError> {
    if !input.exists() {
        warn!("No scan report found at {}", input.display());
        write_output(output, html::PLACEHOLDER)?;
        return Ok(RenderOutcome {
            placeholder: true,
            row_count: 0,
            totals: SeverityTotals::default(),
        });
    }

    let document = load_document(input)?;
    info!(
        "Loaded {} result(s) from {}",
        document.results.len(),
        input.display()
    );

    let (rows, totals) = normalize::normalize(&document);
    debug!("Normalized {} row(s), {} issue(s)", rows.len(), totals.sum());

    let page = html::render(&rows, &totals, &generation_stamp());
    write_output(output, &page)?;

    Ok(RenderOutcome {
        placeholder: false,
        row_count: rows.len(),
        totals,
    })
}

/// Wall-clock stamp shown in the report header.
pub fn generation_stamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

fn load_document(path: &Path) -> Result<ScanDocument, ReportError> {
    let raw = fs::read_to_string(path).map_err(|source| ReportError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| ReportError::MalformedInput {
        path: path.to_path_buf(),
        source,
    })
}

fn write_output(path: &Path, page: &str) -> Result<(), ReportError> {
    fs::write(path, page).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })
}
