use thiserror::Error;

/// Error type that captures failures which abort a pipeline run.
///
/// Malformed rows and unparsable cells are tolerated locally by the ingestion
/// layer and never surface here; only a missing required input or an I/O
/// failure on it is fatal.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("details input is missing")]
    MissingDetails,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
