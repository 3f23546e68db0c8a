//! HTML table fragments substituted into the report templates

use crate::issue::{Issue, Location};
use crate::matrix::SeverityTypeMatrix;
use crate::metric::{format_duration, NormalizedMetric};
use crate::rollup::Rollup;
use crate::taxonomy::{IssueType, Severity, Taxonomy};
use html_escape::encode_text;
use std::fmt::Write;

/// Placeholder for an issue the server reports without a text range
pub const NOT_AVAILABLE: &str = "N/A";

pub fn format_location(location: Option<&Location>) -> String {
    match location {
        Some(l) => format!(
            "Lines: {}-{}, Offset: {}-{}",
            l.start_line, l.end_line, l.start_offset, l.end_offset
        ),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Order issues by severity (most severe first), then component.
///
/// The sort is stable, so equal rows keep their arrival order.
pub fn sort_issues(issues: &mut [Issue]) {
    issues.sort_by(|a, b| {
        a.severity
            .cmp(&b.severity)
            .then_with(|| a.component.cmp(&b.component))
    });
}

/// One row per issue, in the order given
pub fn issue_table(issues: &[Issue], taxonomy: Taxonomy) -> String {
    let mut html = String::from(
        "<table class='issues'><tr><th>Component</th><th>Message</th><th>Severity</th>\
         <th>Type</th><th>Location</th><th>Rule</th><th>Effort</th></tr>",
    );
    for issue in issues {
        let _ = write!(
            html,
            "<tr><td class='small'>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            encode_text(&issue.component),
            encode_text(&issue.message),
            taxonomy.severity_label(issue.severity),
            taxonomy.type_label(issue.kind),
            format_location(issue.location.as_ref()),
            encode_text(&issue.rule),
            format_duration(issue.effort),
        );
    }
    html.push_str("</table>");
    html
}

/// Severity rows × type columns, with row totals, column totals and the
/// grand total.
pub fn severity_table(matrix: &SeverityTypeMatrix, taxonomy: Taxonomy) -> String {
    let mut html = String::from("<table class='small severities'><tr><th>Severity</th>");
    for kind in IssueType::all() {
        let _ = write!(html, "<th>{}</th>", taxonomy.type_label(kind));
    }
    html.push_str("<th>Total</th></tr>");

    for severity in Severity::all() {
        let _ = write!(html, "<tr><td>{}</td>", taxonomy.severity_label(severity));
        for kind in IssueType::all() {
            let _ = write!(html, "<td>{}</td>", matrix.get(severity, kind));
        }
        let _ = write!(html, "<td>{}</td></tr>", matrix.row_total(severity));
    }

    html.push_str("<tr class='total'><td>Total</td>");
    for kind in IssueType::all() {
        let _ = write!(html, "<td>{}</td>", matrix.column_total(kind));
    }
    let _ = write!(html, "<td>{}</td></tr></table>", matrix.total());
    html
}

pub fn metrics_table(metrics: &[NormalizedMetric]) -> String {
    let mut html = String::from("<table class='small measures'><tr><th>Metric</th><th>Value</th></tr>");
    for metric in metrics {
        let _ = write!(
            html,
            "<tr><td>{}</td><td>{}</td></tr>",
            encode_text(&metric.name),
            encode_text(&metric.value)
        );
    }
    html.push_str("</table>");
    html
}

/// Run-wide scalar totals
pub fn totals_table(rollup: &Rollup) -> String {
    let rows = [
        ("Projects", rollup.projects.to_string()),
        ("Issues", rollup.matrix.total().to_string()),
        ("Effort", format_duration(rollup.effort)),
        ("Technical Debt", format_duration(rollup.debt)),
        ("Lines of Code", rollup.lines_of_code.to_string()),
        ("Security Hotspots", rollup.hotspots.to_string()),
        (
            "Complexity",
            rollup
                .complexity
                .map(|c| c.to_string())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        ),
    ];

    let mut html = String::from("<table class='small totals'><tr><th>Metric</th><th>Total</th></tr>");
    for (name, value) in rows {
        let _ = write!(html, "<tr><td>{}</td><td>{}</td></tr>", name, value);
    }
    html.push_str("</table>");
    html
}
