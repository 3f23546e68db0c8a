//! Project measures and their conversion into report units

use crate::error::{ReportError, Result};
use crate::source::JsonSource;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

pub const MEASURES_PATH: &str = "/api/measures/component";

/// Metrics requested when the configuration does not name any
pub const DEFAULT_METRIC_KEYS: &[&str] = &[
    "ncloc",
    "complexity",
    "bugs",
    "vulnerabilities",
    "code_smells",
    "security_hotspots",
    "coverage",
    "duplicated_lines_density",
    "reliability_rating",
    "security_rating",
    "sqale_rating",
    "sqale_index",
    "security_hotspots_reviewed",
];

pub const LINES_OF_CODE: &str = "ncloc";
pub const SECURITY_HOTSPOTS: &str = "security_hotspots";
pub const COMPLEXITY: &str = "complexity";

const GRADE_METRICS: &[&str] = &[
    "reliability_rating",
    "security_rating",
    "sqale_rating",
    "security_review_rating",
];

const PERCENTAGE_METRICS: &[&str] = &[
    "coverage",
    "line_coverage",
    "branch_coverage",
    "security_hotspots_reviewed",
    "duplicated_lines_density",
];

const DURATION_METRICS: &[&str] = &[
    "sqale_index",
    "reliability_remediation_effort",
    "security_remediation_effort",
];

/// How a metric's raw value is turned into its display form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricPolicy {
    /// `"1.0"`..`"5.0"` → `A`..`E`
    Grade,
    /// raw value with a `%` appended
    Percentage,
    /// minutes → `"<H>h <M>min"` / `"<M>min"`
    Duration,
    Passthrough,
}

impl MetricPolicy {
    pub fn for_key(key: &str) -> Self {
        if GRADE_METRICS.contains(&key) {
            MetricPolicy::Grade
        } else if PERCENTAGE_METRICS.contains(&key) {
            MetricPolicy::Percentage
        } else if DURATION_METRICS.contains(&key) {
            MetricPolicy::Duration
        } else {
            MetricPolicy::Passthrough
        }
    }

    /// Convert `raw`. Values a policy cannot interpret come back verbatim.
    pub fn apply(self, raw: &str) -> String {
        match self {
            MetricPolicy::Grade => grade(raw)
                .map(String::from)
                .unwrap_or_else(|| raw.to_string()),
            MetricPolicy::Percentage => format!("{}%", raw),
            MetricPolicy::Duration => raw
                .trim()
                .parse::<u64>()
                .map(format_duration)
                .unwrap_or_else(|_| raw.to_string()),
            MetricPolicy::Passthrough => raw.to_string(),
        }
    }
}

/// Normalize one metric value according to its key
pub fn normalize(key: &str, raw: &str) -> String {
    MetricPolicy::for_key(key).apply(raw)
}

/// Letter grade for a 1–5 rating, truncating the fraction (`"2.9"` → `B`).
pub fn grade(raw: &str) -> Option<char> {
    let value: f64 = raw.trim().parse().ok()?;
    if !(1.0..6.0).contains(&value) {
        return None;
    }
    match value.trunc() as u8 {
        1 => Some('A'),
        2 => Some('B'),
        3 => Some('C'),
        4 => Some('D'),
        5 => Some('E'),
        _ => None,
    }
}

/// `65` → `"1h 5min"`, `45` → `"45min"`
pub fn format_duration(minutes: u64) -> String {
    if minutes >= 60 {
        format!("{}h {}min", minutes / 60, minutes % 60)
    } else {
        format!("{}min", minutes)
    }
}

#[derive(Debug, Deserialize)]
struct MeasuresResponse {
    component: MeasuredComponent,
    #[serde(default)]
    metrics: Vec<MetricDefinition>,
}

#[derive(Debug, Deserialize)]
struct MeasuredComponent {
    #[serde(default)]
    measures: Vec<RawMeasure>,
}

#[derive(Debug, Deserialize)]
struct RawMeasure {
    metric: String,
    /// Absent for measures that only carry period values
    #[serde(default)]
    value: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MetricDefinition {
    key: String,
    #[serde(default)]
    name: Option<String>,
}

/// One raw measurement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measure {
    pub key: String,
    pub value: String,
}

/// A measure ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedMetric {
    pub name: String,
    pub value: String,
}

impl std::fmt::Display for NormalizedMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

/// Measures of one project plus the catalog of metric display names.
#[derive(Debug, Clone, Default)]
pub struct ProjectMeasures {
    measures: Vec<Measure>,
    names: HashMap<String, String>,
}

impl ProjectMeasures {
    pub fn new(measures: Vec<Measure>, names: HashMap<String, String>) -> Self {
        Self { measures, names }
    }

    /// Parse a `/api/measures/component` payload
    pub fn from_response(value: Value) -> Result<Self> {
        let response: MeasuresResponse = serde_json::from_value(value)
            .map_err(|e| ReportError::decode("component measures", e))?;

        let measures = response
            .component
            .measures
            .into_iter()
            .filter_map(|m| m.value.map(|value| Measure { key: m.metric, value }))
            .collect();
        let names = response
            .metrics
            .into_iter()
            .filter_map(|d| d.name.map(|name| (d.key, name)))
            .collect();

        Ok(Self { measures, names })
    }

    pub fn measures(&self) -> &[Measure] {
        &self.measures
    }

    /// Raw, un-normalized value of `key`
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.measures
            .iter()
            .find(|m| m.key == key)
            .map(|m| m.value.as_str())
    }

    /// Raw value of `key` as a whole number; `"12.0"` reads as 12
    pub fn raw_u64(&self, key: &str) -> Option<u64> {
        let raw = self.raw(key)?.trim();
        raw.parse::<u64>()
            .ok()
            .or_else(|| raw.parse::<f64>().ok().filter(|v| *v >= 0.0).map(|v| v as u64))
    }

    /// Catalog name for `key`, or the key itself
    pub fn display_name<'a>(&'a self, key: &'a str) -> &'a str {
        self.names.get(key).map(String::as_str).unwrap_or(key)
    }

    /// Order measures by their position in `keys`; unknown keys go last.
    pub fn order_by(&mut self, keys: &[String]) {
        self.measures
            .sort_by_key(|m| keys.iter().position(|k| *k == m.key).unwrap_or(usize::MAX));
    }

    pub fn normalized(&self) -> Vec<NormalizedMetric> {
        self.measures
            .iter()
            .map(|m| NormalizedMetric {
                name: self.display_name(&m.key).to_string(),
                value: normalize(&m.key, &m.value),
            })
            .collect()
    }
}

/// Fetch `keys` for one project, ordered as requested.
pub fn fetch_measures(
    source: &dyn JsonSource,
    project: &str,
    branch: &str,
    keys: &[String],
) -> Result<ProjectMeasures> {
    let query = [
        ("component", project.to_string()),
        ("metricKeys", keys.join(",")),
        ("additionalFields", "metrics".to_string()),
        ("branch", branch.to_string()),
    ];
    let value = source.get_json(MEASURES_PATH, &query)?;
    let mut measures = ProjectMeasures::from_response(value)?;
    measures.order_by(keys);
    Ok(measures)
}
