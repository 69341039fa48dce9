use once_cell::sync::OnceCell;
use std::sync::Arc;
use tracing::{debug, info};

use super::index::WalletIndex;
use super::source::{DatasetSource, FileDatasetSource};
use crate::core::{CanonicalWalletRecord, DatasetMetadata, Result};

/// Read-only wallet lookups over a lazily loaded snapshot.
///
/// The snapshot is parsed at most once. Concurrent first callers block until
/// the winning load finishes; a failed load is returned to the caller and the
/// next call tries again.
pub struct WalletRepository {
    source: Arc<dyn DatasetSource>,
    index: OnceCell<WalletIndex>,
}

impl WalletRepository {
    pub fn new(source: Arc<dyn DatasetSource>) -> Self {
        Self { source, index: OnceCell::new() }
    }

    pub fn from_path(path: impl Into<std::path::PathBuf>) -> Self {
        Self::new(Arc::new(FileDatasetSource::new(path)))
    }

    /// Force the one-time load.
    pub fn load(&self) -> Result<&WalletIndex> {
        self.index.get_or_try_init(|| {
            info!(source = %self.source.describe(), "Loading wallet dataset");
            let index = WalletIndex::from_dataset(self.source.load()?);
            debug!(wallets = index.len(), "Wallet index ready");
            Ok(index)
        })
    }

    pub fn is_loaded(&self) -> bool {
        self.index.get().is_some()
    }

    pub fn get_wallet(&self, address: &str) -> Result<Option<&CanonicalWalletRecord>> {
        Ok(self.load()?.get(address))
    }

    pub fn get_metadata(&self) -> Result<&DatasetMetadata> {
        Ok(self.load()?.metadata())
    }

    pub fn wallet_exists(&self, address: &str) -> Result<bool> {
        Ok(self.get_wallet(address)?.is_some())
    }

    pub fn list_wallets(&self) -> Result<Vec<&CanonicalWalletRecord>> {
        Ok(self.load()?.records())
    }
}

impl std::fmt::Debug for WalletRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletRepository")
            .field("source", &self.source.describe())
            .field("loaded", &self.is_loaded())
            .finish()
    }
}
