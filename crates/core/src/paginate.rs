//! Exhaustive pagination of `/api/issues/search`

use crate::error::{ReportError, Result};
use crate::issue::{Issue, RawIssue};
use crate::pseudonym::ComponentAliases;
use crate::source::JsonSource;
use crate::taxonomy::Taxonomy;
use serde::Deserialize;
use std::collections::HashSet;
use tracing::{debug, warn};

pub const ISSUES_SEARCH_PATH: &str = "/api/issues/search";

/// Statuses that count as outstanding
pub const OPEN_STATUSES: &str = "OPEN,CONFIRMED,REOPENED";

/// What to ask the server for one project
#[derive(Debug, Clone)]
pub struct IssueQuery<'a> {
    pub project: &'a str,
    pub branch: &'a str,
    pub page_size: u32,
}

impl IssueQuery<'_> {
    /// Query parameters for the 1-based `page`
    pub fn params(&self, page: u64) -> Vec<(&'static str, String)> {
        vec![
            ("componentKeys", self.project.to_string()),
            ("ps", self.page_size.to_string()),
            ("p", page.to_string()),
            ("statuses", OPEN_STATUSES.to_string()),
            ("branch", self.branch.to_string()),
        ]
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Paging {
    #[serde(default)]
    page_size: Option<u64>,
    #[serde(default)]
    total: Option<u64>,
}

/// One page of search results.
///
/// Older servers report `total`/`ps` at the top level, newer ones under
/// `paging`; the top-level values win when both are present.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuePage {
    #[serde(default)]
    pub issues: Vec<RawIssue>,
    #[serde(default)]
    total: Option<u64>,
    #[serde(default)]
    ps: Option<u64>,
    #[serde(default)]
    paging: Option<Paging>,
    #[serde(default)]
    pub effort_total: u64,
    #[serde(default)]
    pub debt_total: Option<u64>,
}

impl IssuePage {
    pub fn total(&self) -> u64 {
        self.total
            .or_else(|| self.paging.as_ref().and_then(|p| p.total))
            .unwrap_or(self.issues.len() as u64)
    }

    pub fn page_size(&self) -> Option<u64> {
        self.ps
            .or_else(|| self.paging.as_ref().and_then(|p| p.page_size))
            .filter(|&ps| ps > 0)
    }

    /// `debtTotal`, or `effortTotal` on servers that no longer send it
    pub fn debt_or_effort(&self) -> u64 {
        self.debt_total.unwrap_or(self.effort_total)
    }
}

/// All open issues of one project, in arrival order.
#[derive(Debug, Clone, Default)]
pub struct IssueCollection {
    pub issues: Vec<Issue>,
    /// `effortTotal` of the last page fetched
    pub effort_total: u64,
    /// `debtTotal` of the last page fetched, falling back to `effortTotal`
    pub debt_total: u64,
    /// `total` as last reported by the server
    pub reported_total: u64,
    pub pages_fetched: u64,
}

/// Fetch every page of open issues for `query.project`.
///
/// Pages are requested one at a time until `page * ps >= total`, reading
/// `total` and `ps` fresh from each response. Issues are keyed by `key`; a
/// key seen on an earlier page is never replaced. Any transport failure
/// aborts the whole collection.
pub fn collect_issues(
    source: &dyn JsonSource,
    query: &IssueQuery<'_>,
    taxonomy: Taxonomy,
    aliases: &mut ComponentAliases,
) -> Result<IssueCollection> {
    let mut collection = IssueCollection::default();
    let mut seen: HashSet<String> = HashSet::new();
    let mut page: u64 = 1;

    loop {
        let value = source.get_json(ISSUES_SEARCH_PATH, &query.params(page))?;
        let payload: IssuePage = serde_json::from_value(value).map_err(|e| {
            ReportError::decode(format!("issue page {} of {}", page, query.project), e)
        })?;

        let total = payload.total();
        let page_size = payload
            .page_size()
            .unwrap_or_else(|| u64::from(query.page_size.max(1)));
        let received = payload.issues.len();

        debug!(
            project = query.project,
            page,
            received,
            total,
            page_size,
            "fetched issue page"
        );

        collection.effort_total = payload.effort_total;
        collection.debt_total = payload.debt_or_effort();
        if payload.debt_total.is_none() {
            warn!(project = query.project, "no debtTotal in response, using effortTotal");
        }
        collection.reported_total = total;
        collection.pages_fetched = page;

        for raw in payload.issues {
            if seen.contains(&raw.key) {
                continue;
            }
            let issue = Issue::extract(raw, taxonomy, aliases)?;
            seen.insert(issue.key.clone());
            collection.issues.push(issue);
        }

        if page * page_size >= total {
            break;
        }
        if received == 0 {
            warn!(
                project = query.project,
                page,
                total,
                collected = collection.issues.len(),
                "server returned an empty page before reaching total"
            );
            break;
        }
        page += 1;
    }

    Ok(collection)
}
