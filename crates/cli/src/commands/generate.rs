//! Report generation — wires config, transport, the run loop and templates together

use anyhow::{bail, Context, Result};
use colored::Colorize;
use sonar_report_core::{ReportConfig, ReportRun, RunOptions, Taxonomy, Templates};
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::client::SonarClient;
use crate::progress::Step;
use crate::projects::resolve_projects;

/// CLI flags merged over `.sonar-report.toml`
#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub template_dir: Option<PathBuf>,
    pub output: PathBuf,
    pub options: RunOptions,
}

impl Settings {
    pub fn resolve(cli: &crate::Cli, config: &ReportConfig) -> Self {
        let options = RunOptions {
            branch: cli
                .branch
                .clone()
                .unwrap_or_else(|| config.server.branch.clone()),
            page_size: cli.page_size.unwrap_or(config.server.page_size).max(1),
            taxonomy: Taxonomy::new(cli.impact_severities, cli.quality_types),
            include_details: cli.details,
            pseudonymize: cli.pseudonymize,
            metric_keys: config.report.metric_keys.clone(),
        };

        Self {
            host: cli.host.clone().unwrap_or_else(|| config.server.host.clone()),
            template_dir: cli
                .templates
                .clone()
                .or_else(|| config.report.template_dir.clone()),
            output: cli
                .output
                .clone()
                .unwrap_or_else(|| config.report.output.clone()),
            options,
        }
    }
}

pub fn run(cli: &crate::Cli) -> Result<()> {
    let start = Instant::now();

    eprintln!(
        "{}",
        format!("  sonar-report v{}", sonar_report_core::VERSION).bold()
    );
    eprintln!();

    // ── 1. Config ────────────────────────────────────────────────
    let cwd = std::env::current_dir().context("resolve working directory")?;
    let config = ReportConfig::find_and_load(&cwd)?;
    let settings = Settings::resolve(cli, &config);

    let projects = resolve_projects(&cli.projects)?;
    if projects.is_empty() {
        bail!("no projects to report on");
    }

    // Templates are read before any request so a bad path fails fast
    let templates = Templates::load(settings.template_dir.as_deref())?;

    eprintln!(
        "  {} project(s) on {} (branch {}, {})",
        projects.len(),
        settings.host,
        settings.options.branch,
        settings.options.taxonomy
    );

    // ── 2. Fetch and aggregate ───────────────────────────────────
    let client = SonarClient::new(&settings.host, &cli.token)?;
    let mut run = ReportRun::new(&client, settings.options.clone());

    for project in &projects {
        let step = Step::new(format!("Collecting {}", project));
        match run.process_project(project) {
            Ok(report) => step.finish(&format!(
                "{} issues, {} lines of code",
                report.issue_count, report.totals.lines_of_code
            )),
            Err(e) => {
                step.fail();
                return Err(e).with_context(|| format!("project {}", project));
            }
        }
    }

    // ── 3. Output ────────────────────────────────────────────────
    let date = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let document = run.render(&templates, &date);
    write_report(&settings.output, &document)?;

    let rollup = run.rollup();
    eprintln!();
    eprintln!(
        "  {} {} issues across {} project(s) → {} ({:.1}s)",
        "✓".green(),
        rollup.matrix.total(),
        rollup.projects,
        settings.output.display(),
        start.elapsed().as_secs_f64()
    );

    Ok(())
}

fn write_report(path: &Path, document: &str) -> Result<()> {
    std::fs::write(path, document).with_context(|| format!("write report {}", path.display()))
}
