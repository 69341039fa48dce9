//! Community feed section `chainabuse_reports`.
//!
//! Two shapes live under it: `individual_addresses_risk` maps an address to a
//! free-text detail, and `full_hack_reports` is a list of reports each naming
//! its affected wallets.

use serde_json::Value;

use super::{
    array_field, bool_field, display_id, object_field, string_field, AddressUpdate,
    SourceNormalizer, WalletUpdate, COMMUNITY_REPORT,
};
use crate::core::EvidenceCitation;
use crate::ingest::network::guess_network;
use crate::ingest::risk::{
    level_segment, normalize_risk_level, parenthetical_tag, parse_category_tokens,
};

pub const INDIVIDUAL_SOURCE: &str = "Chainabuse Individual Address Risk";
pub const HACK_REPORTS_SOURCE: &str = "Chainabuse Full Hack Reports";

#[derive(Debug, Default)]
pub struct IndividualAddressRisk;

impl SourceNormalizer for IndividualAddressRisk {
    fn source_name(&self) -> &str {
        INDIVIDUAL_SOURCE
    }

    fn normalize(&self, section: &Value) -> Vec<AddressUpdate> {
        let Some(entries) = object_field(section, "individual_addresses_risk") else {
            return Vec::new();
        };

        entries
            .iter()
            .filter_map(|(address, detail)| {
                let detail = detail.as_str()?;
                let risk_level = normalize_risk_level(Some(level_segment(detail)));
                let tokens = parse_category_tokens(detail);
                // a blank group suppresses the address heuristic
                let network = match parenthetical_tag(detail) {
                    Some(tag) => Some(tag).filter(|tag| !tag.is_empty()),
                    None => guess_network(address).map(str::to_string),
                };

                let citation = EvidenceCitation::new(INDIVIDUAL_SOURCE)
                    .with_kind(Some(COMMUNITY_REPORT.to_string()))
                    .with_detail(detail)
                    .with_risk_level(risk_level)
                    .with_scam_category(tokens.first().cloned());
                let update = WalletUpdate::default()
                    .with_network(network)
                    .with_risk_level(risk_level)
                    .with_scam_categories(tokens)
                    .with_citation(citation);
                Some(AddressUpdate::new(address.as_str(), update))
            })
            .collect()
    }
}

#[derive(Debug, Default)]
pub struct HackReports;

impl HackReports {
    fn normalize_report(&self, report: &Value) -> Vec<AddressUpdate> {
        if !report.is_object() {
            return Vec::new();
        }
        let risk_level = normalize_risk_level(report.get("risk_level").and_then(Value::as_str));
        let scam_category = string_field(report, "scamCategory");
        let created_at = string_field(report, "createdAt");
        let trusted = bool_field(report, "trusted");
        let detail = format!("Hack report {}", display_id(report));

        array_field(report, "affected_wallets")
            .iter()
            .filter_map(Value::as_str)
            .filter(|address| !address.is_empty())
            .map(|address| {
                let citation = EvidenceCitation::new(HACK_REPORTS_SOURCE)
                    .with_kind(Some(COMMUNITY_REPORT.to_string()))
                    .with_risk_level(risk_level)
                    .with_scam_category(scam_category.clone())
                    .with_detail(detail.clone())
                    .with_created_at(created_at.clone())
                    .with_trusted(trusted);
                let update = WalletUpdate::default()
                    .with_risk_level(risk_level)
                    .with_scam_categories(scam_category.clone())
                    .with_network(guess_network(address).map(str::to_string))
                    .with_citation(citation);
                AddressUpdate::new(address, update)
            })
            .collect()
    }
}

impl SourceNormalizer for HackReports {
    fn source_name(&self) -> &str {
        HACK_REPORTS_SOURCE
    }

    fn normalize(&self, section: &Value) -> Vec<AddressUpdate> {
        array_field(section, "full_hack_reports")
            .iter()
            .flat_map(|report| self.normalize_report(report))
            .collect()
    }
}
