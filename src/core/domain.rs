use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Placeholder network assigned when no feed declares or implies one.
pub const UNKNOWN_NETWORK: &str = "DESCONOCIDA";

/// Canonical severity tiers, declared in ascending order so the derived
/// `Ord` matches the ordinal scale. `Option<RiskLevel>` orders `None` below
/// every tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "BAJO")]
    Low,
    #[serde(rename = "MEDIO")]
    Medium,
    #[serde(rename = "ALTO")]
    High,
    #[serde(rename = "CRÍTICO")]
    Critical,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    /// Label used in feeds, snapshots and the risk scale mapping.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "BAJO",
            Self::Medium => "MEDIO",
            Self::High => "ALTO",
            Self::Critical => "CRÍTICO",
        }
    }

    /// Exact match against the canonical vocabulary. Variant spellings are
    /// handled by `ingest::risk::normalize_risk_level`.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str() == label)
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One piece of evidence tying a risk signal to an upstream feed record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceCitation {
    pub source: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<RiskLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scam_category: Option<String>,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trusted: Option<bool>,
    /// Raw feed score, only carried by scored feeds. Not part of the dedup key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// Identity of a citation within one address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CitationKey {
    pub source: String,
    pub detail: Option<String>,
    pub risk_level: Option<RiskLevel>,
    pub scam_category: Option<String>,
    pub created_at: Option<String>,
}

impl EvidenceCitation {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            kind: None,
            detail: None,
            risk_level: None,
            scam_category: None,
            created_at: None,
            trusted: None,
            score: None,
        }
    }

    pub fn with_kind(mut self, kind: Option<String>) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_risk_level(mut self, level: Option<RiskLevel>) -> Self {
        self.risk_level = level;
        self
    }

    pub fn with_scam_category(mut self, category: Option<String>) -> Self {
        self.scam_category = category;
        self
    }

    pub fn with_created_at(mut self, created_at: Option<String>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn with_trusted(mut self, trusted: Option<bool>) -> Self {
        self.trusted = trusted;
        self
    }

    pub fn with_score(mut self, score: Option<f64>) -> Self {
        self.score = score;
        self
    }

    pub fn dedup_key(&self) -> CitationKey {
        CitationKey {
            source: self.source.clone(),
            detail: self.detail.clone(),
            risk_level: self.risk_level,
            scam_category: self.scam_category.clone(),
            created_at: self.created_at.clone(),
        }
    }
}

/// Final per-address risk summary. Built once by the finalizer, read-only after.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalWalletRecord {
    /// Filled from the map key when a snapshot omits it
    #[serde(default)]
    pub address: String,
    pub networks: Vec<String>,
    pub risk_level: Option<RiskLevel>,
    pub risk_score: Option<f64>,
    #[serde(default)]
    pub scam_categories: Vec<String>,
    #[serde(default)]
    pub domains: Vec<String>,
    #[serde(default)]
    pub sources: Vec<EvidenceCitation>,
    pub first_seen: Option<String>,
    pub last_seen: Option<String>,
}

/// Description of one generated snapshot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DatasetMetadata {
    pub description: Option<String>,
    pub version: Option<String>,
    pub date_generated: Option<String>,
    /// Category taxonomy copied verbatim from the feed bundle
    pub risk_categories: Option<serde_json::Value>,
    #[serde(default)]
    pub source_file: String,
    #[serde(default)]
    pub records: usize,
    #[serde(default)]
    pub extracted_at: String,
}

/// Snapshot document: metadata plus records keyed by address.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub metadata: DatasetMetadata,
    #[serde(default)]
    pub wallets: BTreeMap<String, CanonicalWalletRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_total_order() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
        assert!(RiskLevel::High < RiskLevel::Critical);
        assert!(None < Some(RiskLevel::Low));
    }

    #[test]
    fn test_risk_level_labels_round_trip() {
        for level in RiskLevel::ALL {
            assert_eq!(RiskLevel::from_label(level.as_str()), Some(level));
            let json = serde_json::to_string(&level).unwrap();
            assert_eq!(json, format!("\"{}\"", level.as_str()));
        }
        assert_eq!(RiskLevel::from_label("CRITICO"), None);
    }

    #[test]
    fn test_citation_serialization_omits_absent_fields() {
        let citation = EvidenceCitation::new("TRM Labs (Simulado)")
            .with_risk_level(Some(RiskLevel::Medium))
            .with_score(Some(0.5));
        let value = serde_json::to_value(&citation).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert_eq!(object["risk_level"], "MEDIO");
        assert!(!object.contains_key("detail"));
    }

    #[test]
    fn test_dedup_key_ignores_score_and_trust() {
        let a = EvidenceCitation::new("feed").with_detail("x").with_score(Some(0.1));
        let b = EvidenceCitation::new("feed")
            .with_detail("x")
            .with_score(Some(0.9))
            .with_trusted(Some(true));
        assert_eq!(a.dedup_key(), b.dedup_key());

        let c = EvidenceCitation::new("feed")
            .with_detail("x")
            .with_created_at(Some("2024-01-01T00:00:00Z".to_string()));
        assert_ne!(a.dedup_key(), c.dedup_key());
    }

    #[test]
    fn test_created_at_uses_camel_case() {
        let citation = EvidenceCitation::new("feed").with_created_at(Some("2024-01-01".into()));
        let value = serde_json::to_value(&citation).unwrap();
        assert_eq!(value["createdAt"], "2024-01-01");
    }
}
