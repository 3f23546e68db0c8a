//! Per-project aggregation of issues and measures

use crate::matrix::SeverityTypeMatrix;
use crate::metric::{ProjectMeasures, COMPLEXITY, LINES_OF_CODE, SECURITY_HOTSPOTS};
use crate::paginate::IssueCollection;
use crate::render;
use crate::taxonomy::Taxonomy;

/// Scalars a project contributes to the run totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectTotals {
    pub effort: u64,
    pub debt: u64,
    pub lines_of_code: u64,
    pub hotspots: u64,
    /// `None` when the project does not report complexity
    pub complexity: Option<u64>,
}

impl ProjectTotals {
    /// Read roll-up scalars from the raw measures, never the normalized ones.
    pub fn from_parts(collection: &IssueCollection, measures: &ProjectMeasures) -> Self {
        Self {
            effort: collection.effort_total,
            debt: collection.debt_total,
            lines_of_code: measures.raw_u64(LINES_OF_CODE).unwrap_or(0),
            hotspots: measures.raw_u64(SECURITY_HOTSPOTS).unwrap_or(0),
            complexity: measures.raw_u64(COMPLEXITY),
        }
    }
}

/// Rendered fragments and raw tallies for one project
#[derive(Debug, Clone)]
pub struct ProjectReport {
    pub label: String,
    /// Empty when issue details are suppressed
    pub issue_table: String,
    pub severity_table: String,
    pub metrics_table: String,
    pub matrix: SeverityTypeMatrix,
    pub issue_count: usize,
    pub totals: ProjectTotals,
}

pub fn build_project_report(
    label: String,
    mut collection: IssueCollection,
    measures: &ProjectMeasures,
    taxonomy: Taxonomy,
    include_details: bool,
) -> ProjectReport {
    render::sort_issues(&mut collection.issues);

    let mut matrix = SeverityTypeMatrix::new();
    for issue in &collection.issues {
        matrix.record(issue.severity, issue.kind);
    }

    let issue_table = if include_details {
        render::issue_table(&collection.issues, taxonomy)
    } else {
        String::new()
    };

    ProjectReport {
        label,
        issue_table,
        severity_table: render::severity_table(&matrix, taxonomy),
        metrics_table: render::metrics_table(&measures.normalized()),
        matrix,
        issue_count: collection.issues.len(),
        totals: ProjectTotals::from_parts(&collection, measures),
    }
}
