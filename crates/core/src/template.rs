//! Report templates and `${NAME}` placeholder substitution

use crate::error::{ReportError, Result};
use std::path::Path;

pub const REPORT_TEMPLATE: &str = "report_template.html";
pub const PROJECT_TEMPLATE: &str = "project_template.html";
pub const OVERALL_TEMPLATE: &str = "overall_template.html";

/// The three template layers of a report.
///
/// - `report`: `${DATE}`, `${OVERALL}`, `${CONTENTS}`
/// - `project`: `${PROJECT_ID}`, `${SEVERITIES}`, `${MEASURES}`, `${ISSUES}`
/// - `overall`: `${TOTAL_AMOUNTS}`, `${MEASURES}`
#[derive(Debug, Clone)]
pub struct Templates {
    pub report: String,
    pub project: String,
    pub overall: String,
}

impl Templates {
    /// Templates compiled into the binary
    pub fn builtin() -> Self {
        Self {
            report: include_str!("../templates/report_template.html").to_string(),
            project: include_str!("../templates/project_template.html").to_string(),
            overall: include_str!("../templates/overall_template.html").to_string(),
        }
    }

    /// Read all three templates from `dir`; every file must exist.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let read = |name: &str| {
            let path = dir.join(name);
            std::fs::read_to_string(&path).map_err(|source| ReportError::Template { path, source })
        };
        Ok(Self {
            report: read(REPORT_TEMPLATE)?,
            project: read(PROJECT_TEMPLATE)?,
            overall: read(OVERALL_TEMPLATE)?,
        })
    }

    /// `from_dir` when a directory is given, otherwise the built-ins
    pub fn load(dir: Option<&Path>) -> Result<Self> {
        match dir {
            Some(dir) => Self::from_dir(dir),
            None => Ok(Self::builtin()),
        }
    }
}

/// Replace each `${NAME}` whose name appears in `values`.
///
/// A single pass over the template: substituted text is never rescanned, and
/// unknown placeholders are left exactly as written.
pub fn substitute(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let replacement = after.find('}').and_then(|end| {
            let name = &after[..end];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, end))
        });
        match replacement {
            Some((value, end)) => {
                out.push_str(value);
                rest = &after[end + 1..];
            }
            None => {
                out.push_str("${");
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
