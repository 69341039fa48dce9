//! Scored risk feed: `{"type": ..., "scores": {address: score}}`.

use serde_json::Value;

use super::{object_field, string_field, AddressUpdate, SourceNormalizer, WalletUpdate};
use crate::core::EvidenceCitation;
use crate::ingest::network::guess_network;
use crate::ingest::risk::score_to_level;

pub const SOURCE: &str = "TRM Labs (Simulado)";

#[derive(Debug, Default)]
pub struct TrmRiskScores;

impl SourceNormalizer for TrmRiskScores {
    fn source_name(&self) -> &str {
        SOURCE
    }

    fn normalize(&self, section: &Value) -> Vec<AddressUpdate> {
        let Some(scores) = object_field(section, "scores") else {
            return Vec::new();
        };
        let feed_type = string_field(section, "type");

        scores
            .iter()
            .filter_map(|(address, score)| {
                let score = score.as_f64()?;
                let level = score_to_level(score);
                let citation = EvidenceCitation::new(SOURCE)
                    .with_kind(feed_type.clone())
                    .with_risk_level(Some(level))
                    .with_score(Some(score));
                let update = WalletUpdate::default()
                    .with_network(guess_network(address).map(str::to_string))
                    .with_risk_level(Some(level))
                    .with_risk_score(Some(score))
                    .with_citation(citation);
                Some(AddressUpdate::new(address.as_str(), update))
            })
            .collect()
    }
}
