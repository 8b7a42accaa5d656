//! HTML report rendering.
//!
//! Produces one self-contained page (inline CSS, inline script, no external
//! resources) from the normalized rows and severity totals. Rendering is a
//! pure function of its inputs plus the caller-supplied generation stamp.

use crate::report::row::{Row, Severity, SeverityTotals};

/// Page written when the input report does not exist.
pub const PLACEHOLDER: &str = "<html><body><h3>No JSON report found</h3></body></html>";

/// Truncation limit for descriptions shown inline (summaries, tooltips).
pub const INLINE_DESC_LIMIT: usize = 300;

/// Truncation limit for the description inside a table row.
pub const ROW_DESC_LIMIT: usize = 800;

/// Render the full report page.
pub fn render(rows: &[Row], totals: &SeverityTotals, generated_at: &str) -> String {
    format!(
        r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<title>Vulnerability Scan Report</title>
<style>{css}</style>
</head>
<body>
<h1>Vulnerability Scan Report</h1>
<p class="small">Generated: {generated_at}</p>
{summary}
{filters}
{table}
<script>{js}</script>
</body>
</html>
"#,
        css = inline_css(),
        generated_at = escape(generated_at),
        summary = render_summary(rows, totals),
        filters = render_filters(),
        table = render_table(rows),
        js = inline_js(),
    )
}

/// Summary cards: the headline total plus one card per severity.
fn render_summary(rows: &[Row], totals: &SeverityTotals) -> String {
    let mut out = String::from("<div class=\"summary\">\n");
    out.push_str(&format!(
        "<div class=\"card\"><strong>Total issues/packages</strong><div class=\"total\">{}</div></div>\n",
        totals.display_total(rows.len())
    ));
    for severity in Severity::ALL {
        out.push_str(&format!(
            "<div class=\"card\"><strong>{sev}</strong><div class=\"count {sev}\">{n}</div></div>\n",
            sev = severity.as_str(),
            n = totals.get(severity)
        ));
    }
    out.push_str("</div>");
    out
}

/// One button per severity plus "All"; wired to the inline filter script.
fn render_filters() -> String {
    let mut out = String::from(
        "<div class=\"filter\"><label>Filter: </label>\n<button onclick=\"filterSeverity('ALL')\">All</button>\n",
    );
    for severity in Severity::ALL {
        out.push_str(&format!(
            "<button onclick=\"filterSeverity('{sev}')\">{sev}</button>\n",
            sev = severity.as_str()
        ));
    }
    out.push_str("</div>");
    out
}

fn render_table(rows: &[Row]) -> String {
    let mut out = String::from(
        "<table id=\"findings\"><thead><tr>\
         <th>Target</th><th>ID</th><th>Package</th><th>Installed</th>\
         <th>Fixed</th><th>Severity</th><th>Title / Description</th>\
         </tr></thead>\n<tbody>\n",
    );
    for row in rows {
        out.push_str(&render_row(row));
    }
    out.push_str("</tbody></table>");
    out
}

fn render_row(row: &Row) -> String {
    format!(
        "<tr data-sev=\"{sev}\">\
         <td>{target}</td><td>{id}</td><td>{package}</td>\
         <td>{installed}</td><td>{fixed}</td>\
         <td class=\"{sev}\">{sev}</td><td>{detail}</td>\
         </tr>\n",
        sev = row.severity.as_str(),
        target = escape(&row.target),
        id = escape(&row.id),
        package = escape(&row.package),
        installed = escape(&row.installed),
        fixed = escape(&row.fixed),
        detail = render_detail(row),
    )
}

/// Title, truncated description, and reference links. Each part is omitted
/// when its source value is empty.
fn render_detail(row: &Row) -> String {
    let mut detail = String::new();

    if !row.title.is_empty() {
        detail.push_str(&format!("<strong>{}</strong><br/>", escape(&row.title)));
    }

    if !row.description.is_empty() {
        let text = escape(&truncate(&row.description, ROW_DESC_LIMIT));
        detail.push_str(&text.replace('\n', "<br/>"));
    }

    if !row.references.is_empty() {
        detail.push_str("<div class=\"refs\"><em>References:</em><ul>");
        for reference in &row.references {
            let href = escape(reference);
            detail.push_str(&format!(
                "<li><a href=\"{href}\" target=\"_blank\">{href}</a></li>"
            ));
        }
        detail.push_str("</ul></div>");
    }

    detail
}

/// Escape a value for embedding in HTML text or attribute position.
/// Everything sourced from the scan document goes through here; reports
/// describe untrusted targets, so their strings are untrusted too.
pub fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Truncate at a word boundary: cut at the last space inside `limit`
/// characters and append an ellipsis marker. A prefix with no space at all
/// is kept whole, so a long token is never split below `limit`.
pub fn truncate(text: &str, limit: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let prefix: String = text.chars().take(limit).collect();
    let cut = match prefix.rfind(' ') {
        Some(idx) => &prefix[..idx],
        None => prefix.as_str(),
    };
    format!("{cut}...")
}

fn inline_css() -> &'static str {
    r#"
body{font-family:Arial,Helvetica,sans-serif;margin:18px}
h1{color:#2b2b2b}
.small{font-size:0.9em;color:#666}
.summary{display:flex;gap:12px;margin-bottom:12px;flex-wrap:wrap}
.card{padding:10px;border-radius:6px;background:#f5f7fa;border:1px solid #e3e6ea}
.card .total{font-size:24px}
.card .count{font-size:20px}
.filter{margin-bottom:12px}
table{border-collapse:collapse;width:100%}
th,td{border:1px solid #ddd;padding:8px;text-align:left;vertical-align:top}
th{background:#0b6fb8;color:white}
.CRITICAL{color:#8b0000;font-weight:bold}
.HIGH{color:#d9534f}
.MEDIUM{color:#f0ad4e}
.LOW{color:#5cb85c}
.UNKNOWN{color:gray}
.refs{margin-top:8px}
"#
}

fn inline_js() -> &'static str {
    r#"
function filterSeverity(sev) {
  var rows = document.querySelectorAll('#findings tbody tr');
  rows.forEach(function (row) {
    if (sev === 'ALL') { row.style.display = ''; return; }
    row.style.display = (row.getAttribute('data-sev') === sev) ? '' : 'none';
  });
}
"#
}
