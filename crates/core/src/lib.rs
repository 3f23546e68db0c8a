//! sonar-report core - issue and metric aggregation engine
//!
//! This crate turns the REST API of a code-quality server into report
//! fragments:
//! - Exhaustive pagination of the open-issue search
//! - Selection between the issue-native and impact-based taxonomies
//! - Conversion of raw measures into grades, percentages and durations
//! - Per-project severity × type matrices and their cross-project roll-up
//! - Placeholder substitution into the report templates
//!
//! HTTP is behind the [`JsonSource`] trait; the CLI crate supplies the
//! transport.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod issue;
pub mod matrix;
pub mod metric;
pub mod paginate;
pub mod pseudonym;
pub mod render;
pub mod report;
pub mod rollup;
pub mod source;
pub mod taxonomy;
pub mod template;

pub use aggregate::{build_project_report, ProjectReport, ProjectTotals};
pub use config::ReportConfig;
pub use error::{ReportError, Result};
pub use issue::{Issue, Location, RawIssue};
pub use matrix::SeverityTypeMatrix;
pub use metric::{normalize, MetricPolicy, ProjectMeasures};
pub use paginate::{collect_issues, IssueCollection, IssueQuery};
pub use pseudonym::{ComponentAliases, ProjectAliases};
pub use report::{ReportRun, RunOptions};
pub use rollup::Rollup;
pub use source::JsonSource;
pub use taxonomy::{IssueType, Severity, SeverityScheme, Taxonomy, TypeScheme};
pub use template::Templates;

/// sonar-report version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
