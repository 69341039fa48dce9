// tests/util.rs
// Shared fixtures for integration tests
#![allow(dead_code)]

use serde_json::json;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use wallet_risk_intel::core::{Dataset, Settings};
use wallet_risk_intel::dataset::{write_snapshot, DatasetBuilder};
use wallet_risk_intel::repository::{MemoryDatasetSource, WalletRepository};
use wallet_risk_intel::service::{WalletService, WalletVerificationUseCase};

/// Only named by the sanctions feed.
pub const SANCTIONED_EVM: &str = "0xABCDEF0123456789ABCDEF0123456789ABCDEF01";
/// Scored, hacked and reported.
pub const SCORED_EVM: &str = "0x47ce0c6ac56edb84e2ad330bec0b500ad6e71bee";
pub const TRON_WALLET: &str = "TQn9Y2khEsLJW1ChVWFMSMeRDow5KcbLSE";
pub const BTC_WALLET: &str = "bc1qdc9gnr2tqfm78lqhxunapaw605qhkpsq36ysr6";
pub const LTC_WALLET: &str = "LVg2kJoFNg45Nbpy53h7Fe1wKyeXVRhMH9";
/// No declared or inferable network.
pub const UNKNOWN_WALLET: &str = "mystery-wallet-001";
pub const ABSENT_WALLET: &str = "0x0000000000000000000000000000000000000bad";

/// Metadata object, grouped reports and two standalone reports, concatenated
/// the way the upstream export writes them.
pub fn sample_bundle() -> String {
    let metadata = json!({
        "description": "Simulated threat intel bundle",
        "version": "1.0",
        "date_generated": "2024-06-01",
        "risk_categories": {"CRÍTICO": ["HACK", "RUG_PULL"], "BAJO": ["AIRDROP"]},
        "data_sources": {
            "ofac_sanctions": {
                "type": "SANCTIONS_LIST",
                "addresses": {SANCTIONED_EVM: "ALTO - (EVM)"}
            },
            "trm_risk_scores": {
                "type": "RISK_SCORE",
                "scores": {SCORED_EVM: 0.87, TRON_WALLET: 0.95}
            },
            "chainabuse_reports": {
                "individual_addresses_risk": {TRON_WALLET: "CRITICO - PIG_BUTCHERING (TRON)"},
                "full_hack_reports": [{
                    "id": "hack-1",
                    "risk_level": "critical",
                    "scamCategory": "CONTRACT_EXPLOIT",
                    "createdAt": "2024-03-01T12:00:00Z",
                    "trusted": true,
                    "affected_wallets": [BTC_WALLET, SCORED_EVM]
                }]
            }
        }
    });
    let grouped = json!({"reports": [{
        "id": "r-100",
        "scamCategory": "PHISHING",
        "createdAt": "2024-05-10T08:30:00Z",
        "trusted": false,
        "addresses": [{"address": SCORED_EVM, "domain": "claim-airdrop.example"}]
    }]});
    let romance = json!({
        "id": "r-200",
        "scamCategory": "ROMANCE",
        "createdAt": "2024-01-15T09:00:00+02:00",
        "addresses": [{"address": UNKNOWN_WALLET}]
    });
    let airdrop = json!({
        "id": "r-201",
        "scamCategory": "AIRDROP",
        "createdAt": "2024-02-20",
        "addresses": [{"address": LTC_WALLET, "chain": "ltc"}]
    });
    format!("{}\n{}{}\n{}", metadata, grouped, romance, airdrop)
}

pub fn build_sample() -> Dataset {
    DatasetBuilder::new("Data2.txt").build_from_str(&sample_bundle())
}

/// Write the sample bundle into `dir` and return its path.
pub fn write_bundle(dir: &Path) -> PathBuf {
    let path = dir.join("Data2.txt");
    std::fs::write(&path, sample_bundle()).expect("write bundle");
    path
}

/// Build the sample bundle and write its snapshot into `dir`.
pub fn write_sample_snapshot(dir: &Path) -> PathBuf {
    let path = dir.join("data").join("wallet_risk_dataset.json");
    write_snapshot(&build_sample(), &path).expect("write snapshot");
    path
}

pub fn use_case_for(repository: WalletRepository) -> WalletVerificationUseCase {
    let service = WalletService::from_settings(Arc::new(repository), &Settings::default());
    WalletVerificationUseCase::new(service)
}

pub fn in_memory_use_case() -> WalletVerificationUseCase {
    use_case_for(WalletRepository::new(Arc::new(MemoryDatasetSource::new(
        build_sample(),
    ))))
}
