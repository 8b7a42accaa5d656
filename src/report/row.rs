use serde::{Deserialize, Serialize};

/// Severity level of a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Unknown,
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Display order for summary cards and filter buttons.
    pub const ALL: [Severity; 5] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
        Severity::Unknown,
    ];

    /// Parse a scanner-reported severity. Case-insensitive; empty or
    /// unrecognized values map to `Unknown`.
    pub fn parse(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "CRITICAL" => Severity::Critical,
            "HIGH" => Severity::High,
            "MEDIUM" => Severity::Medium,
            "LOW" => Severity::Low,
            _ => Severity::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
            Severity::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One rendering-ready table row: either a vulnerability finding or an
/// inventory entry, normalized to the same shape. Rows keep the input's
/// iteration order; the table applies no sorting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub target: String,
    pub id: String,
    pub package: String,
    pub installed: String,
    pub fixed: String,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub references: Vec<String>,
}

/// Per-severity counts. Only vulnerability rows are recorded here;
/// inventory rows represent packages, not issues.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeverityTotals {
    critical: usize,
    high: usize,
    medium: usize,
    low: usize,
    unknown: usize,
}

impl SeverityTotals {
    pub fn record(&mut self, severity: Severity) {
        match severity {
            Severity::Critical => self.critical += 1,
            Severity::High => self.high += 1,
            Severity::Medium => self.medium += 1,
            Severity::Low => self.low += 1,
            Severity::Unknown => self.unknown += 1,
        }
    }

    pub fn get(&self, severity: Severity) -> usize {
        match severity {
            Severity::Critical => self.critical,
            Severity::High => self.high,
            Severity::Medium => self.medium,
            Severity::Low => self.low,
            Severity::Unknown => self.unknown,
        }
    }

    pub fn sum(&self) -> usize {
        self.critical + self.high + self.medium + self.low + self.unknown
    }

    /// The headline count for the summary card. Inventory-only reports
    /// leave every bucket at zero, so fall back to the raw row count.
    pub fn display_total(&self, row_count: usize) -> usize {
        if self.sum() > 0 {
            self.sum()
        } else {
            row_count
        }
    }
}
