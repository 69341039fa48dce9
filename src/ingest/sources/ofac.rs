//! Sanctions list: `{"type": ..., "addresses": {address: detail}}`.
//!
//! Detail strings look like `"ALTO - (EVM)"`: the level precedes the first
//! dash and the network is the parenthesised tag.

use serde_json::Value;

use super::{object_field, string_field, AddressUpdate, SourceNormalizer, WalletUpdate};
use crate::core::EvidenceCitation;
use crate::ingest::risk::{level_segment, normalize_risk_level, parenthetical_tag};

pub const SOURCE: &str = "OFAC Sanctions (Simulado)";
pub const SANCTION_CATEGORY: &str = "SANCTION";

#[derive(Debug, Default)]
pub struct OfacSanctions;

impl SourceNormalizer for OfacSanctions {
    fn source_name(&self) -> &str {
        SOURCE
    }

    fn normalize(&self, section: &Value) -> Vec<AddressUpdate> {
        let Some(addresses) = object_field(section, "addresses") else {
            return Vec::new();
        };
        let feed_type = string_field(section, "type");

        addresses
            .iter()
            .filter_map(|(address, detail)| {
                let detail = detail.as_str()?;
                let risk_level = normalize_risk_level(Some(level_segment(detail)));
                let citation = EvidenceCitation::new(SOURCE)
                    .with_kind(feed_type.clone())
                    .with_detail(detail)
                    .with_risk_level(risk_level);
                let update = WalletUpdate::default()
                    .with_network(parenthetical_tag(detail).filter(|tag| !tag.is_empty()))
                    .with_risk_level(risk_level)
                    .with_scam_categories([SANCTION_CATEGORY.to_string()])
                    .with_citation(citation);
                Some(AddressUpdate::new(address.as_str(), update))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RiskLevel;
    use serde_json::json;

    #[test]
    fn test_sanction_entry() {
        let section = json!({
            "type": "SANCTIONS_LIST",
            "addresses": {"0xABCDEF0123456789abcdef0123456789ABCDEF01": "ALTO - (EVM)"}
        });
        let updates = OfacSanctions.normalize(&section);
        assert_eq!(updates.len(), 1);

        let AddressUpdate { address, update } = &updates[0];
        assert_eq!(address, "0xABCDEF0123456789abcdef0123456789ABCDEF01");
        assert_eq!(update.networks, vec!["EVM".to_string()]);
        assert_eq!(update.risk_levels, vec![RiskLevel::High]);
        assert_eq!(update.scam_categories, vec!["SANCTION".to_string()]);

        let citation = update.citation.as_ref().unwrap();
        assert_eq!(citation.source, "OFAC Sanctions (Simulado)");
        assert_eq!(citation.kind.as_deref(), Some("SANCTIONS_LIST"));
        assert_eq!(citation.detail.as_deref(), Some("ALTO - (EVM)"));
        assert_eq!(citation.risk_level, Some(RiskLevel::High));
    }

    #[test]
    fn test_unknown_level_and_missing_network() {
        let section = json!({"addresses": {"addr": "SEVERO - sin red"}});
        let updates = OfacSanctions.normalize(&section);
        let update = &updates[0].update;
        assert!(update.networks.is_empty());
        assert!(update.risk_levels.is_empty());
        assert_eq!(update.citation.as_ref().unwrap().risk_level, None);
        assert_eq!(update.citation.as_ref().unwrap().kind, None);
    }

    #[test]
    fn test_malformed_sections_skipped() {
        assert!(OfacSanctions.normalize(&json!({})).is_empty());
        assert!(OfacSanctions.normalize(&json!({"addresses": []})).is_empty());
        let updates = OfacSanctions.normalize(&json!({"addresses": {"a": 5, "b": "BAJO - (TRON)"}}));
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].address, "b");
    }
}
