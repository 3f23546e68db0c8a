//! Severity and type vocabularies
//!
//! The server has exposed two incompatible ways of classifying an issue over
//! its history: the issue-native `severity`/`type` pair and the newer
//! impact-based `impacts[].severity`/`impacts[].softwareQuality` pair. A run
//! picks one of each once, and every issue, matrix and table built afterwards
//! uses that choice.

use std::fmt;

/// Number of levels in either severity vocabulary
pub const SEVERITY_LEVELS: usize = 5;

/// Number of members in either type vocabulary
pub const TYPE_COUNT: usize = 3;

const ISSUE_SEVERITIES: [&str; SEVERITY_LEVELS] = ["BLOCKER", "CRITICAL", "MAJOR", "MINOR", "INFO"];
const IMPACT_SEVERITIES: [&str; SEVERITY_LEVELS] = ["BLOCKER", "HIGH", "MEDIUM", "LOW", "INFO"];
const ISSUE_TYPES: [&str; TYPE_COUNT] = ["BUG", "VULNERABILITY", "CODE_SMELL"];
const QUALITY_TYPES: [&str; TYPE_COUNT] = ["RELIABILITY", "SECURITY", "MAINTAINABILITY"];

/// Position of an issue in the selected severity order (0 = most severe)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Severity(usize);

impl Severity {
    pub fn from_rank(rank: usize) -> Option<Self> {
        (rank < SEVERITY_LEVELS).then_some(Severity(rank))
    }

    pub fn rank(self) -> usize {
        self.0
    }

    /// Every severity, most severe first
    pub fn all() -> impl Iterator<Item = Severity> {
        (0..SEVERITY_LEVELS).map(Severity)
    }
}

/// Position of an issue in the selected type vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IssueType(usize);

impl IssueType {
    pub fn from_index(index: usize) -> Option<Self> {
        (index < TYPE_COUNT).then_some(IssueType(index))
    }

    pub fn index(self) -> usize {
        self.0
    }

    pub fn all() -> impl Iterator<Item = IssueType> {
        (0..TYPE_COUNT).map(IssueType)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeverityScheme {
    /// `BLOCKER, CRITICAL, MAJOR, MINOR, INFO` from the issue's `severity`
    #[default]
    Issue,
    /// `BLOCKER, HIGH, MEDIUM, LOW, INFO` from the issue's first impact
    Impact,
}

impl SeverityScheme {
    pub fn labels(self) -> &'static [&'static str; SEVERITY_LEVELS] {
        match self {
            SeverityScheme::Issue => &ISSUE_SEVERITIES,
            SeverityScheme::Impact => &IMPACT_SEVERITIES,
        }
    }

    pub fn label(self, severity: Severity) -> &'static str {
        self.labels()[severity.0]
    }

    pub fn parse(self, label: &str) -> Option<Severity> {
        self.labels()
            .iter()
            .position(|l| l.eq_ignore_ascii_case(label))
            .map(Severity)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeScheme {
    /// `BUG, VULNERABILITY, CODE_SMELL` from the issue's `type`
    #[default]
    Issue,
    /// `RELIABILITY, SECURITY, MAINTAINABILITY` from the issue's first impact
    Quality,
}

impl TypeScheme {
    pub fn labels(self) -> &'static [&'static str; TYPE_COUNT] {
        match self {
            TypeScheme::Issue => &ISSUE_TYPES,
            TypeScheme::Quality => &QUALITY_TYPES,
        }
    }

    pub fn label(self, kind: IssueType) -> &'static str {
        self.labels()[kind.0]
    }

    pub fn parse(self, label: &str) -> Option<IssueType> {
        self.labels()
            .iter()
            .position(|l| l.eq_ignore_ascii_case(label))
            .map(IssueType)
    }
}

/// The run-wide vocabulary choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Taxonomy {
    pub severities: SeverityScheme,
    pub types: TypeScheme,
}

impl Taxonomy {
    pub fn new(impact_severities: bool, quality_types: bool) -> Self {
        Self {
            severities: if impact_severities {
                SeverityScheme::Impact
            } else {
                SeverityScheme::Issue
            },
            types: if quality_types {
                TypeScheme::Quality
            } else {
                TypeScheme::Issue
            },
        }
    }

    pub fn severity_label(&self, severity: Severity) -> &'static str {
        self.severities.label(severity)
    }

    pub fn type_label(&self, kind: IssueType) -> &'static str {
        self.types.label(kind)
    }
}

impl fmt::Display for Taxonomy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severities = match self.severities {
            SeverityScheme::Issue => "issue severities",
            SeverityScheme::Impact => "impact severities",
        };
        let types = match self.types {
            TypeScheme::Issue => "issue types",
            TypeScheme::Quality => "quality types",
        };
        write!(f, "{} / {}", severities, types)
    }
}
