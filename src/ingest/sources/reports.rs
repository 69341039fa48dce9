//! Generic evidence reports, either batched under a `reports` container or
//! appended as standalone objects.
//!
//! Report shape: `{id, scamCategory, createdAt, trusted, addresses: [{address, chain?, domain?}]}`.
//! Every domain named anywhere in a report is attached to every address in it.

use serde_json::Value;
use std::collections::BTreeSet;

use super::{
    array_field, bool_field, display_id, string_field, AddressUpdate, SourceNormalizer,
    WalletUpdate, COMMUNITY_REPORT,
};
use crate::core::EvidenceCitation;
use crate::ingest::network::guess_network;
use crate::ingest::risk::category_risk;

pub const CONSOLIDATED_SOURCE: &str = "Chainabuse Reports Consolidated";
pub const INCREMENTAL_SOURCE: &str = "Chainabuse Reports Incremental";

#[derive(Debug, Clone)]
pub struct CommunityReports {
    source: &'static str,
}

impl CommunityReports {
    /// Reports found in the grouped `reports` container.
    pub fn consolidated() -> Self {
        Self { source: CONSOLIDATED_SOURCE }
    }

    /// Standalone report objects following the container.
    pub fn incremental() -> Self {
        Self { source: INCREMENTAL_SOURCE }
    }
}

impl SourceNormalizer for CommunityReports {
    fn source_name(&self) -> &str {
        self.source
    }

    fn normalize(&self, report: &Value) -> Vec<AddressUpdate> {
        if !report.is_object() {
            return Vec::new();
        }
        let scam_category = string_field(report, "scamCategory");
        let risk_level = scam_category.as_deref().map(category_risk);
        let created_at = string_field(report, "createdAt");
        let trusted = bool_field(report, "trusted");
        let detail = format!("Reporte {}", display_id(report));

        let items = array_field(report, "addresses");
        let domains: BTreeSet<String> = items
            .iter()
            .filter_map(|item| string_field(item, "domain"))
            .collect();

        items
            .iter()
            .filter_map(|item| {
                let address = string_field(item, "address")?;
                let network = match string_field(item, "chain") {
                    Some(chain) => Some(chain.to_uppercase()),
                    None => guess_network(&address).map(str::to_string),
                };
                let citation = EvidenceCitation::new(self.source)
                    .with_kind(Some(COMMUNITY_REPORT.to_string()))
                    .with_risk_level(risk_level)
                    .with_scam_category(scam_category.clone())
                    .with_detail(detail.clone())
                    .with_created_at(created_at.clone())
                    .with_trusted(trusted);
                let update = WalletUpdate::default()
                    .with_network(network)
                    .with_scam_categories(scam_category.clone())
                    .with_risk_level(risk_level)
                    .with_domains(domains.iter().cloned())
                    .with_citation(citation);
                Some(AddressUpdate::new(address, update))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RiskLevel;
    use serde_json::json;

    fn sample_report() -> Value {
        json!({
            "id": "rep-1",
            "scamCategory": "PHISHING",
            "createdAt": "2024-05-10T08:30:00Z",
            "trusted": false,
            "addresses": [
                {"address": "0xAbC123", "domain": "evil.example"},
                {"address": "LVg2kJoFNg45Nbpy53h7Fe1wKyeXVRhMH9", "chain": "ltc"},
                {"domain": "phish.example"},
                {"address": "", "domain": "ignored-address.example"}
            ]
        })
    }

    #[test]
    fn test_domains_shared_across_report_addresses() {
        let updates = CommunityReports::consolidated().normalize(&sample_report());
        assert_eq!(updates.len(), 2);
        for AddressUpdate { update, .. } in &updates {
            assert_eq!(
                update.domains,
                vec![
                    "evil.example".to_string(),
                    "ignored-address.example".to_string(),
                    "phish.example".to_string()
                ]
            );
            assert_eq!(update.risk_levels, vec![RiskLevel::High]);
            assert_eq!(update.scam_categories, vec!["PHISHING".to_string()]);
        }
    }

    #[test]
    fn test_declared_chain_beats_heuristic() {
        let updates = CommunityReports::consolidated().normalize(&sample_report());
        assert_eq!(updates[0].update.networks, vec!["EVM".to_string()]);
        assert_eq!(updates[1].update.networks, vec!["LTC".to_string()]);
    }

    #[test]
    fn test_citation_fields_and_source_name() {
        let updates = CommunityReports::incremental().normalize(&sample_report());
        let citation = updates[0].update.citation.as_ref().unwrap();
        assert_eq!(citation.source, INCREMENTAL_SOURCE);
        assert_eq!(citation.detail.as_deref(), Some("Reporte rep-1"));
        assert_eq!(citation.risk_level, Some(RiskLevel::High));
        assert_eq!(citation.trusted, Some(false));
        assert_eq!(citation.created_at.as_deref(), Some("2024-05-10T08:30:00Z"));
    }

    #[test]
    fn test_unrecognized_category_maps_to_medium() {
        let report = json!({"id": 9, "scamCategory": "NEW_THING", "addresses": [{"address": "x"}]});
        let updates = CommunityReports::incremental().normalize(&report);
        assert_eq!(updates[0].update.risk_levels, vec![RiskLevel::Medium]);
    }

    #[test]
    fn test_missing_category_contributes_no_level() {
        let report = json!({"id": 9, "addresses": [{"address": "x"}]});
        let updates = CommunityReports::incremental().normalize(&report);
        assert!(updates[0].update.risk_levels.is_empty());
        assert!(updates[0].update.scam_categories.is_empty());
        assert_eq!(updates[0].update.citation.as_ref().unwrap().risk_level, None);
    }

    #[test]
    fn test_non_object_report_skipped() {
        assert!(CommunityReports::incremental().normalize(&json!([1, 2])).is_empty());
        assert!(CommunityReports::incremental().normalize(&json!({"id": 1})).is_empty());
    }
}
