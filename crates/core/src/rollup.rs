//! Cross-project accumulation

use crate::aggregate::ProjectReport;
use crate::matrix::SeverityTypeMatrix;

/// Run totals folded from each project in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rollup {
    pub projects: usize,
    pub matrix: SeverityTypeMatrix,
    pub effort: u64,
    pub debt: u64,
    pub lines_of_code: u64,
    pub hotspots: u64,
    /// Sum over the projects that report complexity; `None` if none do
    pub complexity: Option<u64>,
}

impl Rollup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn absorb(&mut self, report: &ProjectReport) {
        let totals = &report.totals;
        self.projects += 1;
        self.matrix.add(&report.matrix);
        self.effort += totals.effort;
        self.debt += totals.debt;
        self.lines_of_code += totals.lines_of_code;
        self.hotspots += totals.hotspots;
        if let Some(complexity) = totals.complexity {
            *self.complexity.get_or_insert(0) += complexity;
        }
    }
}
