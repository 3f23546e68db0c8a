//! Progress indicators

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

/// A single pipeline step backed by an indicatif spinner.
///
/// Create with [`Step::new`], then call [`Step::finish`] or [`Step::fail`]
/// when the work completes. On a non-TTY the spinner draws nothing, but the
/// finish lines are still emitted via `eprintln!`.
pub struct Step {
    pb: ProgressBar,
    label: String,
}

impl Step {
    /// Start a new spinner step with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("  {spinner:.green} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(format!("{}...", label));
        pb.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { pb, label }
    }

    /// Finish successfully: prints `"  label... done — {summary}"`.
    pub fn finish(&self, summary: &str) {
        self.pb.finish_and_clear();
        eprintln!("  {}... {} — {}", self.label, "done".green(), summary);
    }

    /// Finish with an error: prints `"  label... failed"`.
    pub fn fail(&self) {
        self.pb.finish_and_clear();
        eprintln!("  {}... {}", self.label, "failed".red());
    }
}
