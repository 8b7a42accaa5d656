use clap::Parser;
use std::path::PathBuf;

/// vulnreport — scanner JSON to browsable HTML
///
/// Reads one scanner JSON report (Trivy-shaped) and writes one
/// self-contained HTML page with severity counts and filtering.
/// Works offline; the output references no external resources.
#[derive(Parser, Debug)]
#[command(
    name = "vulnreport",
    version,
    about = "Render a vulnerability scan JSON report as self-contained HTML"
)]
pub struct Cli {
    /// Path to the scanner JSON report
    pub input: PathBuf,

    /// Path to write the HTML report
    pub output: PathBuf,

    /// Enable verbose output (debug level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}
