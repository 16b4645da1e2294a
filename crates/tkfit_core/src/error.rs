use thiserror::Error;

#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Empty series: at least one sample is required")]
    EmptySeries,

    #[error("Invalid projection: {0}")]
    InvalidProjection(String),

    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TelemetryError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        TelemetryError::Configuration(msg.into())
    }

    /// Generation and projection are pure; the caller has to fix its input.
    pub fn is_retryable(&self) -> bool {
        false
    }
}

pub type Result<T> = std::result::Result<T, TelemetryError>;
