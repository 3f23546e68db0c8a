//! Blocking HTTP transport for the server's web API

use serde_json::Value;
use sonar_report_core::{JsonSource, ReportError};

/// Authenticated client for one server.
///
/// The token is sent as the basic-auth user name with an empty password.
/// No timeout beyond reqwest's default and no retries: the first failed
/// request ends the run.
pub struct SonarClient {
    http: reqwest::blocking::Client,
    host: String,
    token: String,
}

impl SonarClient {
    pub fn new(host: &str, token: &str) -> Result<Self, ReportError> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("sonar-report/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ReportError::Connection {
                url: host.to_string(),
                message: e.to_string(),
            })?;

        Ok(Self {
            http,
            host: host.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.host, path)
    }
}

impl JsonSource for SonarClient {
    fn get_json(&self, path: &str, query: &[(&str, String)]) -> Result<Value, ReportError> {
        let endpoint = self.endpoint(path);
        let request = self
            .http
            .get(&endpoint)
            .query(query)
            .basic_auth(&self.token, Some(""))
            .build()
            .map_err(|e| ReportError::Connection {
                url: endpoint.clone(),
                message: e.to_string(),
            })?;
        let url = request.url().to_string();
        tracing::debug!(%url, "GET");

        let resp = self
            .http
            .execute(request)
            .map_err(|e| ReportError::Connection {
                url: url.clone(),
                message: e.to_string(),
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().unwrap_or_default();
            return Err(ReportError::Transport { url, status, body });
        }

        resp.json().map_err(|e| ReportError::decode(url, e))
    }
}
