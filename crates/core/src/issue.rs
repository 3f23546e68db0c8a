//! Issue records as returned by `/api/issues/search` and their extracted form

use crate::error::{ReportError, Result};
use crate::pseudonym::ComponentAliases;
use crate::taxonomy::{IssueType, Severity, SeverityScheme, Taxonomy, TypeScheme};
use serde::Deserialize;
use serde_json::Value;

/// Text range of an issue inside its component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub start_line: u32,
    pub end_line: u32,
    #[serde(default)]
    pub start_offset: u32,
    #[serde(default)]
    pub end_offset: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawImpact {
    #[serde(default)]
    pub software_quality: String,
    #[serde(default)]
    pub severity: String,
}

/// One issue exactly as the server sends it.
///
/// Both vocabularies are optional here; which pair is read depends on the
/// run's [`Taxonomy`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawIssue {
    pub key: String,
    #[serde(default)]
    pub component: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default, rename = "type")]
    pub issue_type: Option<String>,
    #[serde(default)]
    pub impacts: Vec<RawImpact>,
    #[serde(default)]
    pub rule: String,
    /// Integer minutes on some servers, `"1h 5min"`-style strings on others
    #[serde(default)]
    pub effort: Option<Value>,
    #[serde(default)]
    pub text_range: Option<Location>,
}

/// An issue after taxonomy selection and pseudonymization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub key: String,
    pub component: String,
    pub message: String,
    pub severity: Severity,
    pub kind: IssueType,
    pub rule: String,
    /// Remediation effort in minutes
    pub effort: u64,
    pub location: Option<Location>,
}

impl Issue {
    /// Extract an issue using the run's taxonomy, rewriting the component
    /// through `aliases`.
    pub fn extract(
        raw: RawIssue,
        taxonomy: Taxonomy,
        aliases: &mut ComponentAliases,
    ) -> Result<Self> {
        let severity = select_severity(&raw, taxonomy.severities)?;
        let kind = select_type(&raw, taxonomy.types)?;
        let effort = raw.effort.as_ref().map(effort_minutes).unwrap_or(0);
        let component = aliases.alias(&raw.component);

        Ok(Issue {
            key: raw.key,
            component,
            message: raw.message,
            severity,
            kind,
            rule: raw.rule,
            effort,
            location: raw.text_range,
        })
    }
}

fn select_severity(raw: &RawIssue, scheme: SeverityScheme) -> Result<Severity> {
    let label = match scheme {
        SeverityScheme::Issue => raw.severity.as_deref(),
        SeverityScheme::Impact => raw.impacts.first().map(|i| i.severity.as_str()),
    };
    let label = label.ok_or_else(|| {
        ReportError::decode(format!("issue {}", raw.key), "no severity for the selected taxonomy")
    })?;
    scheme.parse(label).ok_or_else(|| {
        ReportError::decode(format!("issue {}", raw.key), format!("unknown severity `{}`", label))
    })
}

fn select_type(raw: &RawIssue, scheme: TypeScheme) -> Result<IssueType> {
    let label = match scheme {
        TypeScheme::Issue => raw.issue_type.as_deref(),
        TypeScheme::Quality => raw.impacts.first().map(|i| i.software_quality.as_str()),
    };
    let label = label.ok_or_else(|| {
        ReportError::decode(format!("issue {}", raw.key), "no type for the selected taxonomy")
    })?;
    scheme.parse(label).ok_or_else(|| {
        ReportError::decode(format!("issue {}", raw.key), format!("unknown type `{}`", label))
    })
}

fn effort_minutes(value: &Value) -> u64 {
    match value {
        Value::Number(n) => n.as_u64().unwrap_or(0),
        Value::String(s) => parse_duration_minutes(s).unwrap_or_else(|| {
            tracing::debug!(effort = %s, "unparsable effort, counting as 0");
            0
        }),
        _ => 0,
    }
}

/// Parse a server duration such as `"5min"`, `"1h 30min"`, `"2d1h"` or a bare
/// number of minutes. A day counts as 8 hours.
pub fn parse_duration_minutes(text: &str) -> Option<u64> {
    fn apply(digits: &str, unit: &str) -> Option<u64> {
        let n: u64 = digits.parse().ok()?;
        let factor = match unit {
            "" | "min" => 1,
            "h" => 60,
            "d" => 8 * 60,
            _ => return None,
        };
        Some(n * factor)
    }

    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let mut total = 0u64;
    let mut digits = String::new();
    let mut unit = String::new();

    for c in text.chars() {
        if c.is_ascii_digit() {
            if !unit.is_empty() {
                total += apply(&digits, &unit)?;
                digits.clear();
                unit.clear();
            }
            digits.push(c);
        } else if c.is_alphabetic() {
            if digits.is_empty() {
                return None;
            }
            unit.push(c);
        } else if !c.is_whitespace() {
            return None;
        }
    }
    if !digits.is_empty() {
        total += apply(&digits, &unit)?;
    }

    Some(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_server_durations() {
        assert_eq!(parse_duration_minutes("5min"), Some(5));
        assert_eq!(parse_duration_minutes("1h 30min"), Some(90));
        assert_eq!(parse_duration_minutes("1h30min"), Some(90));
        assert_eq!(parse_duration_minutes("2d1h"), Some(1020));
        assert_eq!(parse_duration_minutes("42"), Some(42));
    }

    #[test]
    fn rejects_garbage_durations() {
        assert_eq!(parse_duration_minutes(""), None);
        assert_eq!(parse_duration_minutes("min"), None);
        assert_eq!(parse_duration_minutes("3 weeks"), None);
        assert_eq!(parse_duration_minutes("1.5h"), None);
    }

    #[test]
    fn effort_accepts_numbers_and_strings() {
        assert_eq!(effort_minutes(&serde_json::json!(12)), 12);
        assert_eq!(effort_minutes(&serde_json::json!("1h 5min")), 65);
        assert_eq!(effort_minutes(&serde_json::json!(null)), 0);
    }
}
