use comfy_table::{presets::UTF8_FULL, Table};
use owo_colors::OwoColorize;

use crate::engine::RenderOutcome;
use crate::report::row::Severity;

/// Print a severity breakdown to the terminal after a successful render.
pub fn render(outcome: &RenderOutcome) {
    println!();

    if outcome.row_count == 0 {
        println!("  {}  No findings or packages in the report", "✅".bold());
        println!();
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Severity", "Count"]);
    for severity in Severity::ALL {
        table.add_row(vec![
            colorize(severity),
            outcome.totals.get(severity).to_string(),
        ]);
    }
    println!("{table}");

    let issues = outcome.totals.sum();
    if issues > 0 {
        println!(
            " {} issue(s) across {} row(s)",
            issues.to_string().bold(),
            outcome.row_count
        );
    } else {
        // Inventory-only report: rows are packages, not issues
        println!(
            " {} package(s), no graded issues",
            outcome.row_count.to_string().bold()
        );
    }
    println!();
}

fn colorize(severity: Severity) -> String {
    let label = severity.as_str();
    match severity {
        Severity::Critical => label.red().bold().to_string(),
        Severity::High => label.yellow().bold().to_string(),
        Severity::Medium => label.blue().to_string(),
        Severity::Low => label.green().to_string(),
        Severity::Unknown => label.dimmed().to_string(),
    }
}
