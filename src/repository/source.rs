//! Where a serialized dataset comes from.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::core::{Dataset, Result, RiskIntelError};

/// Backend that yields a parsed snapshot.
pub trait DatasetSource: Send + Sync {
    /// Human-readable location, used in logs
    fn describe(&self) -> String;

    fn load(&self) -> Result<Dataset>;
}

/// Snapshot file written by the dataset builder.
#[derive(Debug, Clone)]
pub struct FileDatasetSource {
    path: PathBuf,
}

impl FileDatasetSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DatasetSource for FileDatasetSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Dataset> {
        if !self.path.exists() {
            return Err(RiskIntelError::DatasetNotFound(self.path.clone()));
        }
        let raw = fs::read_to_string(&self.path)?;
        let dataset: Dataset = serde_json::from_str(&raw)?;
        info!(
            path = %self.path.display(),
            records = dataset.wallets.len(),
            "Wallet dataset loaded"
        );
        Ok(dataset)
    }
}

/// Already-built dataset held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryDatasetSource {
    dataset: Dataset,
}

impl MemoryDatasetSource {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }
}

impl DatasetSource for MemoryDatasetSource {
    fn describe(&self) -> String {
        "memory".to_string()
    }

    fn load(&self) -> Result<Dataset> {
        Ok(self.dataset.clone())
    }
}
