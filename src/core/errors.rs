use std::path::PathBuf;
use thiserror::Error;

/// Problems with a simulation configuration before a run starts
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("arrival probability must be a number between 0 and 1, got {0}")]
    InvalidProbability(f64),
    #[error("could not read configuration file {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid configuration file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Problems collecting configuration from an interactive session
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("input closed")]
    InputClosed,
    #[error("'{input}' is not a valid {field}")]
    Parse { field: &'static str, input: String },
}
