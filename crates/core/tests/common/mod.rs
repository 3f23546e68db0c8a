//! In-memory stand-in for the server's web API

#![allow(dead_code)]

use serde_json::{json, Value};
use sonar_report_core::{JsonSource, ReportError, Result};
use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Default)]
pub struct StubServer {
    /// (project, page) → issue search payload
    issue_pages: HashMap<(String, u64), Value>,
    /// project → measures payload
    measures: HashMap<String, Value>,
    requests: RefCell<Vec<String>>,
}

impl StubServer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_issue_page(mut self, project: &str, page: u64, payload: Value) -> Self {
        self.issue_pages.insert((project.to_string(), page), payload);
        self
    }

    pub fn with_measures(mut self, project: &str, payload: Value) -> Self {
        self.measures.insert(project.to_string(), payload);
        self
    }

    /// Every request as `path?k=v&...`, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    pub fn issue_requests(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .filter(|r| r.starts_with("/api/issues/search"))
            .collect()
    }
}

fn param<'a>(query: &'a [(&str, String)], name: &str) -> Option<&'a str> {
    query
        .iter()
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v.as_str())
}

impl JsonSource for StubServer {
    fn get_json(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        let rendered: Vec<String> = query.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
        let url = format!("{}?{}", path, rendered.join("&"));
        self.requests.borrow_mut().push(url.clone());

        let found = match path {
            "/api/issues/search" => {
                let project = param(query, "componentKeys").unwrap_or_default();
                let page: u64 = param(query, "p").and_then(|p| p.parse().ok()).unwrap_or(1);
                self.issue_pages.get(&(project.to_string(), page)).cloned()
            }
            "/api/measures/component" => {
                let project = param(query, "component").unwrap_or_default();
                self.measures.get(project).cloned()
            }
            _ => None,
        };

        found.ok_or_else(|| ReportError::Transport {
            url,
            status: 404,
            body: r#"{"errors":[{"msg":"Component not found"}]}"#.to_string(),
        })
    }
}

/// A raw issue record carrying both vocabularies
pub fn raw_issue(key: &str, component: &str, severity: &str, kind: &str) -> Value {
    json!({
        "key": key,
        "component": component,
        "message": format!("message for {}", key),
        "severity": severity,
        "type": kind,
        "impacts": [{"softwareQuality": "MAINTAINABILITY", "severity": "LOW"}],
        "rule": "java:S100",
        "effort": "5min",
        "textRange": {"startLine": 1, "endLine": 2, "startOffset": 0, "endOffset": 10}
    })
}

pub fn issue_page(issues: Vec<Value>, total: u64, ps: u64) -> Value {
    json!({
        "issues": issues,
        "total": total,
        "ps": ps,
        "effortTotal": 10,
        "debtTotal": 10
    })
}

pub fn measures_payload(measures: &[(&str, &str)], names: &[(&str, &str)]) -> Value {
    let measures: Vec<Value> = measures
        .iter()
        .map(|(metric, value)| json!({"metric": metric, "value": value}))
        .collect();
    let metrics: Vec<Value> = names
        .iter()
        .map(|(key, name)| json!({"key": key, "name": name}))
        .collect();
    json!({
        "component": {"key": "p", "measures": measures},
        "metrics": metrics
    })
}
