use std::collections::HashMap;

use crate::core::{CanonicalWalletRecord, Dataset, DatasetMetadata};

const HEX_PREFIX: &str = "0x";

/// In-memory lookup structure built once from a loaded snapshot.
#[derive(Debug, Default)]
pub struct WalletIndex {
    metadata: DatasetMetadata,
    wallets: HashMap<String, CanonicalWalletRecord>,
    /// lowercase hex address -> stored address
    hex_aliases: HashMap<String, String>,
}

impl WalletIndex {
    /// Records missing an `address` take their map key. On a lowercase
    /// collision the first stored address keeps the alias.
    pub fn from_dataset(dataset: Dataset) -> Self {
        let mut wallets = HashMap::with_capacity(dataset.wallets.len());
        let mut hex_aliases = HashMap::new();

        for (address, mut record) in dataset.wallets {
            if record.address.is_empty() {
                record.address = address.clone();
            }
            if address.starts_with(HEX_PREFIX) {
                hex_aliases
                    .entry(address.to_lowercase())
                    .or_insert_with(|| address.clone());
            }
            wallets.insert(address, record);
        }

        Self { metadata: dataset.metadata, wallets, hex_aliases }
    }

    /// Exact match first; hex-style input falls back to a case-insensitive match.
    pub fn get(&self, query: &str) -> Option<&CanonicalWalletRecord> {
        let query = query.trim();
        if let Some(record) = self.wallets.get(query) {
            return Some(record);
        }
        if !query.starts_with(HEX_PREFIX) {
            return None;
        }
        self.hex_aliases
            .get(&query.to_lowercase())
            .and_then(|address| self.wallets.get(address))
    }

    pub fn metadata(&self) -> &DatasetMetadata {
        &self.metadata
    }

    pub fn len(&self) -> usize {
        self.wallets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wallets.is_empty()
    }

    /// All records, sorted by address.
    pub fn records(&self) -> Vec<&CanonicalWalletRecord> {
        let mut records: Vec<_> = self.wallets.values().collect();
        records.sort_by(|a, b| a.address.cmp(&b.address));
        records
    }
}
