use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use tracing::debug;

use crate::core::{CanonicalWalletRecord, CitationKey, EvidenceCitation, RiskLevel};
use crate::ingest::sources::{AddressUpdate, WalletUpdate};

use super::finalizer::finalize;

/// Mutable accumulation state for one address during a build pass.
///
/// Owned by `AggregateMerger`; turned into a `CanonicalWalletRecord` once by
/// the finalizer.
#[derive(Debug, Clone)]
pub struct WalletAggregate {
    pub(super) address: String,
    pub(super) networks: BTreeSet<String>,
    pub(super) risk_levels: BTreeSet<RiskLevel>,
    pub(super) risk_score: Option<f64>,
    pub(super) scam_categories: BTreeSet<String>,
    pub(super) domains: BTreeSet<String>,
    pub(super) sources: Vec<EvidenceCitation>,
    source_keys: HashSet<CitationKey>,
}

impl WalletAggregate {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            networks: BTreeSet::new(),
            risk_levels: BTreeSet::new(),
            risk_score: None,
            scam_categories: BTreeSet::new(),
            domains: BTreeSet::new(),
            sources: Vec::new(),
            source_keys: HashSet::new(),
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn sources(&self) -> &[EvidenceCitation] {
        &self.sources
    }

    pub fn risk_score(&self) -> Option<f64> {
        self.risk_score
    }

    /// Merge one partial update field by field. Returns whether the
    /// update's citation was new for this address.
    pub fn apply(&mut self, update: WalletUpdate) -> bool {
        self.networks
            .extend(update.networks.into_iter().filter(|n| !n.is_empty()));
        self.risk_levels.extend(update.risk_levels);
        self.scam_categories.extend(update.scam_categories);
        self.domains.extend(update.domains);

        if let Some(score) = update.risk_score {
            self.risk_score = Some(match self.risk_score {
                Some(existing) => existing.max(score),
                None => score,
            });
        }

        match update.citation {
            Some(citation) => self.add_citation(citation),
            None => false,
        }
    }

    /// Append unless a citation with the same key was already recorded.
    pub fn add_citation(&mut self, citation: EvidenceCitation) -> bool {
        if !self.source_keys.insert(citation.dedup_key()) {
            return false;
        }
        self.sources.push(citation);
        true
    }
}

/// Registry of aggregates for one build pass, keyed by the exact address string.
#[derive(Debug, Default)]
pub struct AggregateMerger {
    wallets: HashMap<String, WalletAggregate>,
    duplicates_discarded: usize,
}

impl AggregateMerger {
    pub fn new() -> Self {
        Self::default()
    }

    fn get_or_create(&mut self, address: &str) -> &mut WalletAggregate {
        self.wallets
            .entry(address.to_string())
            .or_insert_with(|| WalletAggregate::new(address))
    }

    /// Apply one update to the aggregate for `address`, creating it on first reference.
    pub fn apply(&mut self, address: &str, update: WalletUpdate) {
        let had_citation = update.citation.is_some();
        let appended = self.get_or_create(address).apply(update);
        if had_citation && !appended {
            self.duplicates_discarded += 1;
        }
    }

    pub fn apply_all<I>(&mut self, updates: I)
    where
        I: IntoIterator<Item = AddressUpdate>,
    {
        for AddressUpdate { address, update } in updates {
            self.apply(&address, update);
        }
    }

    pub fn get(&self, address: &str) -> Option<&WalletAggregate> {
        self.wallets.get(address)
    }

    pub fn len(&self) -> usize {
        self.wallets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wallets.is_empty()
    }

    /// Citations dropped because their dedup key was already present.
    pub fn duplicates_discarded(&self) -> usize {
        self.duplicates_discarded
    }

    /// End the pass: finalize every aggregate into an immutable record.
    pub fn finalize(self) -> BTreeMap<String, CanonicalWalletRecord> {
        debug!(
            wallets = self.wallets.len(),
            duplicates = self.duplicates_discarded,
            "Finalizing wallet aggregates"
        );
        self.wallets
            .into_iter()
            .map(|(address, aggregate)| (address, finalize(aggregate)))
            .collect()
    }
}
