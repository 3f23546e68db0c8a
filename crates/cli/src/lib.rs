//! sonar-report CLI library — exposed for integration tests

pub mod client;
pub mod commands;
pub mod progress;
pub mod projects;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sonar-report")]
#[command(about = "Consolidated HTML report of open issues and quality metrics", long_about = None)]
#[command(version = sonar_report_core::VERSION)]
pub struct Cli {
    /// Project keys, or the path of a file listing one key per line
    #[arg(required = true)]
    pub projects: Vec<String>,

    /// API token, sent as the basic-auth user name
    #[arg(short, long, env = "SONAR_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Server URL (default: http://localhost:9000)
    #[arg(long, env = "SONAR_HOST_URL")]
    pub host: Option<String>,

    /// Branch to report on (default: main)
    #[arg(short, long)]
    pub branch: Option<String>,

    /// Include the full issue table for every project
    #[arg(long)]
    pub details: bool,

    /// Replace project keys and file paths with numbered aliases
    #[arg(long)]
    pub pseudonymize: bool,

    /// Use impact-based severities (BLOCKER, HIGH, MEDIUM, LOW, INFO)
    #[arg(long)]
    pub impact_severities: bool,

    /// Use software-quality types (RELIABILITY, SECURITY, MAINTAINABILITY)
    #[arg(long)]
    pub quality_types: bool,

    /// Issues requested per page
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Directory with report_template.html, project_template.html and overall_template.html
    #[arg(long)]
    pub templates: Option<PathBuf>,

    /// Output file (default: report.html)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print debug logs
    #[arg(short, long)]
    pub verbose: bool,
}
