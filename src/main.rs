use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use vulnreport::cli::Cli;
use vulnreport::engine;
use vulnreport::report::terminal;

fn main() -> Result<()> {
    let raw_args: Vec<String> = std::env::args().collect();

    // ── Usage check (before clap parsing) ───────────────────────────
    // Missing paths get a usage line on stdout with exit 1; clap's own
    // missing-argument error would go to stderr with exit 2. Help and
    // version requests still go through clap.
    let clap_handled = ["-h", "--help", "-V", "--version"];
    let wants_clap = raw_args
        .iter()
        .skip(1)
        .any(|arg| clap_handled.contains(&arg.as_str()));
    if raw_args.len() < 3 && !wants_clap {
        println!("Usage: vulnreport <scan-json> <output-html>");
        std::process::exit(1);
    }

    // ── Normal clap flow ────────────────────────────────────────────
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("vulnreport=debug")
    } else if cli.quiet {
        EnvFilter::new("vulnreport=error")
    } else {
        EnvFilter::new("vulnreport=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    info!("vulnreport v{}", env!("CARGO_PKG_VERSION"));

    let outcome = engine::run(&cli.input, &cli.output)?;

    // Placeholder page: the diagnostic is already logged, nothing to summarize
    if outcome.placeholder {
        return Ok(());
    }

    if !cli.quiet {
        terminal::render(&outcome);
    }
    println!("HTML report written to {}", cli.output.display());

    Ok(())
}
