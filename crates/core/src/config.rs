//! Configuration file parsing for .sonar-report.toml

use crate::metric::DEFAULT_METRIC_KEYS;
use crate::report::{DEFAULT_BRANCH, DEFAULT_PAGE_SIZE};
use anyhow::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = ".sonar-report.toml";

/// Main configuration structure for .sonar-report.toml
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub report: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the analysis server
    #[serde(default = "default_host")]
    pub host: String,

    /// Branch whose issues and measures are reported
    #[serde(default = "default_branch")]
    pub branch: String,

    /// Issues requested per page
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory holding report/project/overall templates (built-ins if unset)
    #[serde(default)]
    pub template_dir: Option<PathBuf>,

    /// Where the report is written
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Metrics fetched for every project
    #[serde(default = "default_metric_keys")]
    pub metric_keys: Vec<String>,
}

// Default functions
pub fn default_host() -> String {
    "http://localhost:9000".to_string()
}

fn default_branch() -> String {
    DEFAULT_BRANCH.to_string()
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_output() -> PathBuf {
    PathBuf::from("report.html")
}

fn default_metric_keys() -> Vec<String> {
    DEFAULT_METRIC_KEYS.iter().map(|k| k.to_string()).collect()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            report: OutputConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            branch: default_branch(),
            page_size: default_page_size(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            template_dir: None,
            output: default_output(),
            metric_keys: default_metric_keys(),
        }
    }
}

impl ReportConfig {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: ReportConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Find and load .sonar-report.toml from the given directory or its ancestors
    pub fn find_and_load(start_dir: &Path) -> Result<Self> {
        let mut current = start_dir;

        loop {
            let config_path = current.join(CONFIG_FILE);
            if config_path.exists() {
                return Self::from_file(&config_path);
            }

            match current.parent() {
                Some(parent) => current = parent,
                None => break,
            }
        }

        // No config found, use defaults
        Ok(Self::default())
    }
}
