use crate::document::{Findings, ScanDocument};
use crate::report::row::{Row, Severity, SeverityTotals};

/// Flatten the document's results into uniform rows and accumulate
/// severity totals. Vulnerability entries count toward the totals;
/// inventory entries do not — they are packages, not issues.
pub fn normalize(document: &ScanDocument) -> (Vec<Row>, SeverityTotals) {
    let mut rows = Vec::new();
    let mut totals = SeverityTotals::default();

    for result in &document.results {
        match result.findings() {
            Findings::Vulnerabilities(vulns) => {
                for vuln in vulns {
                    let severity = Severity::parse(&vuln.severity);
                    totals.record(severity);
                    rows.push(Row {
                        target: result.target.clone(),
                        id: vuln.vulnerability_id.clone(),
                        package: vuln.pkg_name.clone(),
                        installed: vuln.installed_version.clone(),
                        fixed: vuln.fixed_version.clone(),
                        severity,
                        title: vuln.title.clone(),
                        description: vuln.description.clone(),
                        references: vuln.references.clone(),
                    });
                }
            }
            Findings::Inventory(packages) => {
                for package in packages {
                    rows.push(Row {
                        target: result.target.clone(),
                        id: package.identifier.purl.clone(),
                        package: package.name.clone(),
                        installed: package.version.clone(),
                        fixed: String::new(),
                        severity: Severity::Unknown,
                        title: String::new(),
                        description: String::new(),
                        references: Vec::new(),
                    });
                }
            }
            Findings::None => {}
        }
    }

    (rows, totals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{PackageEntry, PackageIdentifier, ScanResult, Vulnerability};

    fn vuln(id: &str, severity: &str) -> Vulnerability {
        Vulnerability {
            vulnerability_id: id.to_string(),
            pkg_name: "pkg".to_string(),
            installed_version: "1.0".to_string(),
            severity: severity.to_string(),
            ..Default::default()
        }
    }

    fn package(name: &str, purl: &str) -> PackageEntry {
        PackageEntry {
            name: name.to_string(),
            version: "2.0".to_string(),
            identifier: PackageIdentifier {
                purl: purl.to_string(),
            },
        }
    }

    #[test]
    fn vulnerability_entries_yield_rows_and_totals() {
        let document = ScanDocument {
            results: vec![ScanResult {
                target: "app".to_string(),
                vulnerabilities: vec![vuln("CVE-1", "high"), vuln("CVE-2", "CRITICAL")],
                packages: Vec::new(),
            }],
        };

        let (rows, totals) = normalize(&document);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, "CVE-1");
        assert_eq!(rows[0].severity, Severity::High);
        assert_eq!(rows[1].severity, Severity::Critical);
        assert_eq!(totals.get(Severity::High), 1);
        assert_eq!(totals.get(Severity::Critical), 1);
        assert_eq!(totals.sum(), 2);
    }

    #[test]
    fn inventory_entries_yield_rows_but_no_totals() {
        let document = ScanDocument {
            results: vec![ScanResult {
                target: "venv".to_string(),
                vulnerabilities: Vec::new(),
                packages: vec![package("requests", "pkg:pypi/requests@2.0")],
            }],
        };

        let (rows, totals) = normalize(&document);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "pkg:pypi/requests@2.0");
        assert_eq!(rows[0].package, "requests");
        assert_eq!(rows[0].severity, Severity::Unknown);
        assert_eq!(rows[0].fixed, "");
        assert!(rows[0].references.is_empty());
        assert_eq!(totals.sum(), 0);
    }

    #[test]
    fn vulnerabilities_win_when_both_shapes_are_present() {
        let document = ScanDocument {
            results: vec![ScanResult {
                target: "mixed".to_string(),
                vulnerabilities: vec![vuln("CVE-1", "low")],
                packages: vec![package("ignored", "pkg:ignored")],
            }],
        };

        let (rows, totals) = normalize(&document);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "CVE-1");
        assert_eq!(totals.sum(), 1);
    }

    #[test]
    fn empty_results_contribute_nothing() {
        let document = ScanDocument {
            results: vec![ScanResult::default(), ScanResult::default()],
        };

        let (rows, totals) = normalize(&document);
        assert!(rows.is_empty());
        assert_eq!(totals.sum(), 0);
    }

    #[test]
    fn rows_preserve_input_order_across_results() {
        let document = ScanDocument {
            results: vec![
                ScanResult {
                    target: "a".to_string(),
                    vulnerabilities: vec![vuln("CVE-2", "low"), vuln("CVE-1", "critical")],
                    packages: Vec::new(),
                },
                ScanResult {
                    target: "b".to_string(),
                    vulnerabilities: Vec::new(),
                    packages: vec![package("zlib", "pkg:generic/zlib@1")],
                },
            ],
        };

        let (rows, _) = normalize(&document);
        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["CVE-2", "CVE-1", "pkg:generic/zlib@1"]);
    }

    #[test]
    fn missing_severity_counts_as_unknown() {
        let document = ScanDocument {
            results: vec![ScanResult {
                target: "app".to_string(),
                vulnerabilities: vec![vuln("CVE-1", "")],
                packages: Vec::new(),
            }],
        };

        let (rows, totals) = normalize(&document);
        assert_eq!(rows[0].severity, Severity::Unknown);
        assert_eq!(totals.get(Severity::Unknown), 1);
    }
}
