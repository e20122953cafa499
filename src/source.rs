//! Text sources feeding the pipeline its three CSV blobs.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::errors::PipelineError;
use crate::pipeline::PipelineInputs;

/// Supplies the three CSV text blobs a pipeline run consumes.
///
/// The details blob is required and its absence fails the run; either
/// history blob may be missing and is handed over as `None`.
pub trait TextSource {
    /// The required details blob.
    fn details(&self) -> Result<String, PipelineError>;

    /// The optional annual history blob.
    fn annual_history(&self) -> Option<String>;

    /// The optional monthly history blob.
    fn monthly_history(&self) -> Option<String>;

    /// Gathers all three blobs into pipeline inputs.
    fn gather(&self) -> Result<PipelineInputs, PipelineError> {
        Ok(PipelineInputs {
            details: Some(self.details()?),
            annual_history: self.annual_history(),
            monthly_history: self.monthly_history(),
        })
    }
}

/// File-backed text source.
#[derive(Debug, Clone)]
pub struct FileSource {
    details: PathBuf,
    annual: Option<PathBuf>,
    monthly: Option<PathBuf>,
}

impl FileSource {
    pub fn new(details: impl Into<PathBuf>) -> Self {
        Self {
            details: details.into(),
            annual: None,
            monthly: None,
        }
    }

    pub fn with_annual_history(mut self, path: impl Into<PathBuf>) -> Self {
        self.annual = Some(path.into());
        self
    }

    pub fn with_monthly_history(mut self, path: impl Into<PathBuf>) -> Self {
        self.monthly = Some(path.into());
        self
    }
}

impl TextSource for FileSource {
    fn details(&self) -> Result<String, PipelineError> {
        Ok(fs::read_to_string(&self.details)?)
    }

    fn annual_history(&self) -> Option<String> {
        read_optional(self.annual.as_deref())
    }

    fn monthly_history(&self) -> Option<String> {
        read_optional(self.monthly.as_deref())
    }
}

/// Reads an optional blob, degrading any failure to `None`.
fn read_optional(path: Option<&Path>) -> Option<String> {
    let path = path?;
    match fs::read_to_string(path) {
        Ok(text) => Some(text),
        Err(err) => {
            warn!(
                path = %path.display(),
                %err,
                "optional history blob unreadable, treating as absent"
            );
            None
        }
    }
}
