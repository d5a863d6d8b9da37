use thiserror::Error;

/// Error types for the text cleaning pipeline
///
/// The cleaning stages themselves never fail; these cover the edges
/// around them (configuration and batch thread pools) and are mapped
/// onto Python exceptions by the extension module
#[derive(Error, Debug)]
pub enum CleaningError {
    #[error("Invalid cleaner configuration: {0}")]
    ConfigError(String),

    #[error("Unknown cleaning stage: {0}")]
    UnknownStage(String),

    #[error("Invalid configuration JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Parallel processing error: {0}")]
    ParallelError(String),
}
