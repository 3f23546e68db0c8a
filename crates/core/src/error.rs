//! Error types shared by the fetch, decode and template stages

use std::path::PathBuf;
use thiserror::Error;

/// Fatal failures of a report run.
///
/// Recoverable absences (missing `debtTotal`, missing metrics, issues
/// without a text range) never surface here; they are handled where the
/// value is consumed.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("request to {url} failed with HTTP {status}: {body}")]
    Transport {
        url: String,
        status: u16,
        body: String,
    },

    #[error("request to {url} failed: {message}")]
    Connection { url: String, message: String },

    #[error("unexpected response for {context}: {message}")]
    Decode { context: String, message: String },

    #[error("failed to read template {}: {source}", path.display())]
    Template {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ReportError {
    pub fn decode(context: impl Into<String>, message: impl std::fmt::Display) -> Self {
        ReportError::Decode {
            context: context.into(),
            message: message.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
