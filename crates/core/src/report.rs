//! The run loop state and final report assembly

use crate::aggregate::{build_project_report, ProjectReport};
use crate::error::Result;
use crate::metric::{fetch_measures, DEFAULT_METRIC_KEYS};
use crate::paginate::{collect_issues, IssueQuery};
use crate::pseudonym::{ComponentAliases, ProjectAliases};
use crate::render;
use crate::rollup::Rollup;
use crate::source::JsonSource;
use crate::taxonomy::Taxonomy;
use crate::template::{substitute, Templates};
use tracing::debug;

pub const DEFAULT_PAGE_SIZE: u32 = 500;
pub const DEFAULT_BRANCH: &str = "main";

/// Run-wide settings, fixed before the first request
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub branch: String,
    pub page_size: u32,
    pub taxonomy: Taxonomy,
    pub include_details: bool,
    pub pseudonymize: bool,
    pub metric_keys: Vec<String>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            branch: DEFAULT_BRANCH.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            taxonomy: Taxonomy::default(),
            include_details: false,
            pseudonymize: false,
            metric_keys: DEFAULT_METRIC_KEYS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// State owned by one report run.
///
/// Projects are processed strictly in the order `process_project` is
/// called. The alias tables and the roll-up live here and nowhere else.
pub struct ReportRun<'a> {
    source: &'a dyn JsonSource,
    options: RunOptions,
    components: ComponentAliases,
    projects: ProjectAliases,
    rollup: Rollup,
    sections: Vec<ProjectReport>,
}

impl<'a> ReportRun<'a> {
    pub fn new(source: &'a dyn JsonSource, options: RunOptions) -> Self {
        Self {
            source,
            components: ComponentAliases::new(options.pseudonymize),
            projects: ProjectAliases::new(options.pseudonymize),
            options,
            rollup: Rollup::new(),
            sections: Vec::new(),
        }
    }

    /// Fetch, aggregate and roll up one project.
    pub fn process_project(&mut self, project: &str) -> Result<&ProjectReport> {
        let query = IssueQuery {
            project,
            branch: &self.options.branch,
            page_size: self.options.page_size,
        };
        let collection = collect_issues(
            self.source,
            &query,
            self.options.taxonomy,
            &mut self.components,
        )?;
        let measures = fetch_measures(
            self.source,
            project,
            &self.options.branch,
            &self.options.metric_keys,
        )?;

        debug!(
            project,
            issues = collection.issues.len(),
            pages = collection.pages_fetched,
            measures = measures.measures().len(),
            "project collected"
        );

        let label = self.projects.next_label(project);
        let report = build_project_report(
            label,
            collection,
            &measures,
            self.options.taxonomy,
            self.options.include_details,
        );
        self.rollup.absorb(&report);
        let index = self.sections.len();
        self.sections.push(report);

        Ok(&self.sections[index])
    }

    pub fn rollup(&self) -> &Rollup {
        &self.rollup
    }

    /// Assemble the final document
    pub fn render(&self, templates: &Templates, date: &str) -> String {
        assemble(
            templates,
            &self.sections,
            &self.rollup,
            self.options.taxonomy,
            date,
        )
    }
}

pub fn render_project(template: &str, report: &ProjectReport) -> String {
    let label = html_escape::encode_text(&report.label);
    substitute(
        template,
        &[
            ("PROJECT_ID", &*label),
            ("SEVERITIES", report.severity_table.as_str()),
            ("MEASURES", report.metrics_table.as_str()),
            ("ISSUES", report.issue_table.as_str()),
        ],
    )
}

pub fn render_overall(template: &str, rollup: &Rollup, taxonomy: Taxonomy) -> String {
    let amounts = render::severity_table(&rollup.matrix, taxonomy);
    let totals = render::totals_table(rollup);
    substitute(
        template,
        &[("TOTAL_AMOUNTS", amounts.as_str()), ("MEASURES", totals.as_str())],
    )
}

pub fn assemble(
    templates: &Templates,
    sections: &[ProjectReport],
    rollup: &Rollup,
    taxonomy: Taxonomy,
    date: &str,
) -> String {
    let contents: String = sections
        .iter()
        .map(|section| render_project(&templates.project, section))
        .collect();
    let overall = render_overall(&templates.overall, rollup, taxonomy);

    substitute(
        &templates.report,
        &[
            ("DATE", date),
            ("OVERALL", overall.as_str()),
            ("CONTENTS", contents.as_str()),
        ],
    )
}
