//! Error type shared by the build pipeline and the lookup service.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced at the boundaries of the pipeline.
///
/// Malformed feed content never produces an error: normalizers skip what they
/// cannot read. Only missing inputs, I/O and configuration problems reach here.
#[derive(Debug, Error)]
pub enum RiskIntelError {
    /// The raw feed buffer could not be found at build time
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// The generated snapshot could not be found at serve time
    #[error("Dataset not found: {}", .0.display())]
    DatasetNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Query payload rejected before lookup
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, RiskIntelError>;

impl RiskIntelError {
    /// Caller can fix the request and try again.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// The process cannot build or serve without operator intervention.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::InputNotFound(_) | Self::DatasetNotFound(_) | Self::Io(_)
        )
    }
}
