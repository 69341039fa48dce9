//! Per-feed normalizers.
//!
//! Each normalizer reads one feed section (or one report object) as raw JSON
//! and produces partial updates for the addresses it mentions. Entries of the
//! wrong shape are skipped; no normalizer fails.

pub mod chainabuse;
pub mod ofac;
pub mod reports;
pub mod trm;

use serde_json::{Map, Value};

use crate::core::{EvidenceCitation, RiskLevel};

pub use chainabuse::{HackReports, IndividualAddressRisk};
pub use ofac::OfacSanctions;
pub use reports::{CommunityReports, CONSOLIDATED_SOURCE, INCREMENTAL_SOURCE};
pub use trm::TrmRiskScores;

/// Citation `type` for community-sourced evidence.
pub const COMMUNITY_REPORT: &str = "COMMUNITY_REPORT";

/// Fields one feed record contributes to one address. Absent fields are not merged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WalletUpdate {
    pub networks: Vec<String>,
    pub risk_levels: Vec<RiskLevel>,
    pub risk_score: Option<f64>,
    pub scam_categories: Vec<String>,
    pub domains: Vec<String>,
    pub citation: Option<EvidenceCitation>,
}

impl WalletUpdate {
    pub fn with_network(mut self, network: Option<String>) -> Self {
        self.networks.extend(network);
        self
    }

    pub fn with_risk_level(mut self, level: Option<RiskLevel>) -> Self {
        self.risk_levels.extend(level);
        self
    }

    pub fn with_risk_score(mut self, score: Option<f64>) -> Self {
        self.risk_score = score;
        self
    }

    pub fn with_scam_categories<I>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        self.scam_categories.extend(categories);
        self
    }

    pub fn with_domains<I>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        self.domains.extend(domains);
        self
    }

    pub fn with_citation(mut self, citation: EvidenceCitation) -> Self {
        self.citation = Some(citation);
        self
    }
}

/// A partial update addressed to one wallet.
#[derive(Debug, Clone, PartialEq)]
pub struct AddressUpdate {
    pub address: String,
    pub update: WalletUpdate,
}

impl AddressUpdate {
    pub fn new(address: impl Into<String>, update: WalletUpdate) -> Self {
        Self { address: address.into(), update }
    }
}

/// One upstream feed shape.
pub trait SourceNormalizer {
    /// Feed name recorded as the citation source
    fn source_name(&self) -> &str;

    fn normalize(&self, record: &Value) -> Vec<AddressUpdate>;
}

// Lenient field accessors shared by the normalizers.

pub(crate) fn object_field<'a>(value: &'a Value, key: &str) -> Option<&'a Map<String, Value>> {
    value.get(key).and_then(Value::as_object)
}

pub(crate) fn array_field<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Non-empty string field.
pub(crate) fn string_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

pub(crate) fn bool_field(value: &Value, key: &str) -> Option<bool> {
    value.get(key).and_then(Value::as_bool)
}

/// Render a report identifier for citation details.
pub(crate) fn display_id(value: &Value) -> String {
    match value.get("id") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => "N/A".to_string(),
        Some(other) => other.to_string(),
    }
}
