use serde::Deserialize;

/// Top level of a scanner JSON report. Only `Results` matters here;
/// everything else the scanner emits is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScanDocument {
    #[serde(rename = "Results")]
    pub results: Vec<ScanResult>,
}

/// One scanned target. Image and dependency scans carry `Vulnerabilities`;
/// filesystem inventory scans carry `Packages` instead.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScanResult {
    #[serde(rename = "Target")]
    pub target: String,

    #[serde(rename = "Vulnerabilities")]
    pub vulnerabilities: Vec<Vulnerability>,

    #[serde(rename = "Packages")]
    pub packages: Vec<PackageEntry>,
}

/// The two finding shapes a result can carry, classified once so each
/// branch's bookkeeping contract is enforced by the type system.
#[derive(Debug)]
pub enum Findings<'a> {
    Vulnerabilities(&'a [Vulnerability]),
    Inventory(&'a [PackageEntry]),
    None,
}

impl ScanResult {
    /// Classify this result's findings. Vulnerability lists take precedence
    /// when both shapes are present; an empty list counts as absent.
    pub fn findings(&self) -> Findings<'_> {
        if !self.vulnerabilities.is_empty() {
            Findings::Vulnerabilities(&self.vulnerabilities)
        } else if !self.packages.is_empty() {
            Findings::Inventory(&self.packages)
        } else {
            Findings::None
        }
    }
}

/// One advisory against an installed package.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Vulnerability {
    #[serde(rename = "VulnerabilityID")]
    pub vulnerability_id: String,

    #[serde(rename = "PkgName")]
    pub pkg_name: String,

    #[serde(rename = "InstalledVersion")]
    pub installed_version: String,

    /// Empty when no fixed release exists.
    #[serde(rename = "FixedVersion")]
    pub fixed_version: String,

    #[serde(rename = "Severity")]
    pub severity: String,

    #[serde(rename = "Title")]
    pub title: String,

    #[serde(rename = "Description")]
    pub description: String,

    #[serde(rename = "References")]
    pub references: Vec<String>,
}

/// One package from an inventory scan. No severity of its own.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PackageEntry {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Version")]
    pub version: String,

    #[serde(rename = "Identifier")]
    pub identifier: PackageIdentifier,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PackageIdentifier {
    #[serde(rename = "PURL")]
    pub purl: String,
}
