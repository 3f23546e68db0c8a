//! Severity × type issue counts

use crate::taxonomy::{IssueType, Severity, SEVERITY_LEVELS, TYPE_COUNT};

/// Count of issues per (severity, type) cell.
///
/// Every recorded issue increments exactly one cell, so [`total`](Self::total)
/// always equals the number of issues recorded. Project matrices are summed
/// element-wise into the run total with [`add`](Self::add).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeverityTypeMatrix {
    cells: [[u64; TYPE_COUNT]; SEVERITY_LEVELS],
}

impl SeverityTypeMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, severity: Severity, kind: IssueType) {
        self.cells[severity.rank()][kind.index()] += 1;
    }

    pub fn get(&self, severity: Severity, kind: IssueType) -> u64 {
        self.cells[severity.rank()][kind.index()]
    }

    pub fn add(&mut self, other: &SeverityTypeMatrix) {
        for (row, other_row) in self.cells.iter_mut().zip(other.cells.iter()) {
            for (cell, other_cell) in row.iter_mut().zip(other_row.iter()) {
                *cell += other_cell;
            }
        }
    }

    pub fn row_total(&self, severity: Severity) -> u64 {
        self.cells[severity.rank()].iter().sum()
    }

    pub fn column_total(&self, kind: IssueType) -> u64 {
        self.cells.iter().map(|row| row[kind.index()]).sum()
    }

    pub fn total(&self) -> u64 {
        self.cells.iter().flatten().sum()
    }
}
