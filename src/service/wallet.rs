use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

use crate::core::{
    CanonicalWalletRecord, DatasetMetadata, EvidenceCitation, Result, RiskLevel, Settings,
};
use crate::repository::WalletRepository;

/// Client-facing view of one canonical record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletRiskSummary {
    pub address: String,
    pub networks: Vec<String>,
    pub risk_level: Option<RiskLevel>,
    /// Position of `risk_level` on the configured scale, 0 when absent
    pub risk_level_numeric: u32,
    /// `risk_score` as a percentage
    pub risk_score_numeric: Option<i64>,
    pub scam_categories: Vec<String>,
    pub domains: Vec<String>,
    pub first_seen: Option<String>,
    pub last_seen: Option<String>,
    pub sources: Vec<EvidenceCitation>,
}

/// Wallet risk lookups projected onto the client summary shape.
#[derive(Debug, Clone)]
pub struct WalletService {
    repository: Arc<WalletRepository>,
    risk_scale: HashMap<String, u32>,
}

impl WalletService {
    pub fn new(repository: Arc<WalletRepository>, risk_scale: HashMap<String, u32>) -> Self {
        Self { repository, risk_scale }
    }

    pub fn from_settings(repository: Arc<WalletRepository>, settings: &Settings) -> Self {
        Self::new(repository, settings.risk_level_scale.clone())
    }

    pub fn repository(&self) -> &WalletRepository {
        &self.repository
    }

    pub fn get_metadata(&self) -> Result<&DatasetMetadata> {
        self.repository.get_metadata()
    }

    pub fn fetch_wallet_summary(&self, address: &str) -> Result<Option<WalletRiskSummary>> {
        Ok(self
            .repository
            .get_wallet(address)?
            .map(|record| self.project(record)))
    }

    pub fn project(&self, record: &CanonicalWalletRecord) -> WalletRiskSummary {
        let risk_level_numeric = record
            .risk_level
            .and_then(|level| self.risk_scale.get(level.as_str()).copied())
            .unwrap_or(0);

        WalletRiskSummary {
            address: record.address.clone(),
            networks: sorted(&record.networks),
            risk_level: record.risk_level,
            risk_level_numeric,
            risk_score_numeric: record.risk_score.map(percentage),
            scam_categories: sorted(&record.scam_categories),
            domains: sorted(&record.domains),
            first_seen: record.first_seen.clone(),
            last_seen: record.last_seen.clone(),
            sources: record.sources.clone(),
        }
    }
}

fn percentage(score: f64) -> i64 {
    (score * 100.0).round_ties_even() as i64
}

fn sorted(values: &[String]) -> Vec<String> {
    let mut values = values.to_vec();
    values.sort();
    values
}
