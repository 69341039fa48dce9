//! Batch pass: raw feed bundle → `Dataset` snapshot.

use chrono::{SecondsFormat, Utc};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::aggregate::AggregateMerger;
use crate::core::{Dataset, DatasetMetadata, Result, RiskIntelError};
use crate::ingest::extractor::extract_values;
use crate::ingest::sources::{
    CommunityReports, HackReports, IndividualAddressRisk, OfacSanctions,
    SourceNormalizer, TrmRiskScores,
};

/// Input values sorted by structural shape.
#[derive(Debug, Default)]
pub struct FeedBundle {
    /// First value: bundle metadata plus the `data_sources` map
    pub metadata: Value,
    /// Grouped reports under a `reports` list, when present
    pub reports: Vec<Value>,
    /// Standalone report objects carrying an `addresses` list
    pub standalone: Vec<Value>,
}

impl FeedBundle {
    pub fn classify(mut values: Vec<Value>) -> Self {
        if values.is_empty() {
            return Self::default();
        }
        let rest = values.split_off(1);
        let metadata = values.pop().unwrap_or(Value::Null);

        let mut rest = rest.into_iter().peekable();
        let reports = match rest.next_if(|value| value.get("reports").is_some()) {
            Some(mut container) => match container.get_mut("reports").map(Value::take) {
                Some(Value::Array(items)) => items,
                _ => Vec::new(),
            },
            None => Vec::new(),
        };

        let standalone = rest
            .filter(|value| value.get("addresses").is_some())
            .collect();

        Self { metadata, reports, standalone }
    }

    fn data_source(&self, name: &str) -> Option<&Value> {
        self.metadata.get("data_sources")?.get(name)
    }
}

/// Runs one build pass over a feed bundle.
#[derive(Debug, Clone)]
pub struct DatasetBuilder {
    source_file: String,
}

impl DatasetBuilder {
    /// `source_file` is recorded verbatim in the snapshot metadata.
    pub fn new(source_file: impl Into<String>) -> Self {
        Self { source_file: source_file.into() }
    }

    /// Build from a file on disk. A missing file is the only failure.
    pub fn build_from_path(path: &Path) -> Result<Dataset> {
        if !path.exists() {
            return Err(RiskIntelError::InputNotFound(path.to_path_buf()));
        }
        let raw = fs::read_to_string(path)?;
        let source_file = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        info!(path = %path.display(), bytes = raw.len(), "Building wallet dataset");
        Ok(Self::new(source_file).build_from_str(&raw))
    }

    pub fn build_from_str(&self, raw: &str) -> Dataset {
        let values = extract_values(raw);
        debug!(values = values.len(), "Extracted feed values");
        self.build(FeedBundle::classify(values))
    }

    pub fn build(&self, bundle: FeedBundle) -> Dataset {
        let mut merger = AggregateMerger::new();

        let feeds: [(&str, Box<dyn SourceNormalizer>); 4] = [
            ("ofac_sanctions", Box::new(OfacSanctions)),
            ("trm_risk_scores", Box::new(TrmRiskScores)),
            ("chainabuse_reports", Box::new(IndividualAddressRisk)),
            ("chainabuse_reports", Box::new(HackReports)),
        ];
        for (section_name, normalizer) in &feeds {
            if let Some(section) = bundle.data_source(section_name) {
                let updates = normalizer.normalize(section);
                debug!(source = normalizer.source_name(), updates = updates.len(), "Normalized feed");
                merger.apply_all(updates);
            }
        }

        Self::apply_reports(&mut merger, &CommunityReports::consolidated(), &bundle.reports);
        Self::apply_reports(&mut merger, &CommunityReports::incremental(), &bundle.standalone);

        let wallets = merger.finalize();
        let metadata = self.metadata(&bundle.metadata, wallets.len());
        info!(records = wallets.len(), source_file = %self.source_file, "Wallet dataset built");

        Dataset { metadata, wallets }
    }

    fn apply_reports(merger: &mut AggregateMerger, normalizer: &CommunityReports, reports: &[Value]) {
        let mut updates = 0usize;
        for report in reports {
            let batch = normalizer.normalize(report);
            updates += batch.len();
            merger.apply_all(batch);
        }
        debug!(
            source = normalizer.source_name(),
            reports = reports.len(),
            updates,
            "Normalized reports"
        );
    }

    fn metadata(&self, raw: &Value, records: usize) -> DatasetMetadata {
        DatasetMetadata {
            description: scalar_field(raw, "description"),
            version: scalar_field(raw, "version"),
            date_generated: scalar_field(raw, "date_generated"),
            risk_categories: raw.get("risk_categories").filter(|v| !v.is_null()).cloned(),
            source_file: self.source_file.clone(),
            records,
            extracted_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

/// Strings as-is, other non-null scalars rendered as JSON text.
fn scalar_field(value: &Value, key: &str) -> Option<String> {
    match value.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Write the snapshot as pretty JSON, creating parent directories.
pub fn write_snapshot(dataset: &Dataset, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(dataset)?;
    fs::write(path, json)?;
    info!(path = %path.display(), records = dataset.metadata.records, "Snapshot written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{RiskLevel, UNKNOWN_NETWORK};
    use serde_json::json;

    const ADDR: &str = "0xABCDEF0123456789abcdef0123456789ABCDEF01";

    fn bundle_text() -> String {
        let meta = json!({
            "description": "Simulated feeds",
            "version": 2,
            "risk_categories": {"CRÍTICO": ["HACK"]},
            "data_sources": {
                "ofac_sanctions": {"type": "SANCTIONS", "addresses": {ADDR: "ALTO - (EVM)"}},
                "trm_risk_scores": {"type": "RISK_SCORE", "scores": {ADDR: 0.87}},
                "chainabuse_reports": {
                    "individual_addresses_risk": {"mystery-wallet": "BAJO - AIRDROP spam"}
                }
            }
        });
        let container = json!({"reports": [
            {"id": "r1", "scamCategory": "HACK", "createdAt": "2024-02-01T00:00:00Z",
             "addresses": [{"address": ADDR}]},
            "junk"
        ]});
        let standalone = json!({"id": "r2", "scamCategory": "PHISHING",
            "createdAt": "2024-01-01T00:00:00Z", "addresses": [{"address": "LaTeSt", "chain": "ltc"}]});
        let ignored = json!({"unrelated": true});
        format!("{meta}\n{container}{standalone}  {ignored}")
    }

    #[test]
    fn test_classify_with_container() {
        let values = extract_values(&bundle_text());
        let bundle = FeedBundle::classify(values);
        assert_eq!(bundle.reports.len(), 2);
        assert_eq!(bundle.standalone.len(), 1);
        assert!(bundle.data_source("ofac_sanctions").is_some());
    }

    #[test]
    fn test_classify_without_container() {
        let values = vec![json!({}), json!({"addresses": []}), json!(5), json!({"addresses": []})];
        let bundle = FeedBundle::classify(values);
        assert!(bundle.reports.is_empty());
        assert_eq!(bundle.standalone.len(), 2);
    }

    #[test]
    fn test_classify_empty_input() {
        let bundle = FeedBundle::classify(Vec::new());
        assert!(bundle.metadata.is_null());
        assert!(bundle.reports.is_empty());
        assert!(bundle.standalone.is_empty());
    }

    #[test]
    fn test_build_merges_all_feeds() {
        let dataset = DatasetBuilder::new("feeds.txt").build_from_str(&bundle_text());
        assert_eq!(dataset.metadata.records, 3);
        assert_eq!(dataset.metadata.source_file, "feeds.txt");
        assert_eq!(dataset.metadata.version.as_deref(), Some("2"));
        assert!(dataset.metadata.risk_categories.is_some());
        assert!(dataset.metadata.extracted_at.ends_with('Z'));

        let wallet = &dataset.wallets[ADDR];
        assert_eq!(wallet.risk_level, Some(RiskLevel::Critical));
        assert_eq!(wallet.networks, vec!["EVM"]);
        assert_eq!(wallet.risk_score, Some(0.87));
        assert_eq!(wallet.sources.len(), 3);
        assert_eq!(wallet.first_seen.as_deref(), Some("2024-02-01T00:00:00Z"));

        let mystery = &dataset.wallets["mystery-wallet"];
        assert_eq!(mystery.networks, vec![UNKNOWN_NETWORK]);
        assert_eq!(mystery.risk_level, Some(RiskLevel::Low));

        assert_eq!(dataset.wallets["LaTeSt"].networks, vec!["LTC"]);
    }

    #[test]
    fn test_metadata_keeps_input_key_order() {
        let raw = r#"{"risk_categories": {"CRÍTICO": ["HACK"], "ALTO": ["PHISHING"], "BAJO": ["AIRDROP"]}}"#;
        let dataset = DatasetBuilder::new("x").build_from_str(raw);

        let categories = dataset.metadata.risk_categories.unwrap();
        let keys: Vec<&str> = categories.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["CRÍTICO", "ALTO", "BAJO"]);

        let json = serde_json::to_string(&categories).unwrap();
        assert!(json.starts_with(r#"{"CRÍTICO""#));
    }

    #[test]
    fn test_build_is_idempotent_over_repeated_records() {
        let text = bundle_text();
        let once = DatasetBuilder::new("x").build_from_str(&text);
        let doubled = format!("{text}{}", &text[text.find("{\"reports\"").unwrap()..]);
        let twice = DatasetBuilder::new("x").build_from_str(&doubled);
        assert_eq!(once.wallets.len(), twice.wallets.len());
        assert_eq!(twice.wallets["LaTeSt"].sources.len(), 1);
        assert_eq!(once.wallets[ADDR].sources, twice.wallets[ADDR].sources);
    }

    #[test]
    fn test_missing_input_file_is_error() {
        let err = DatasetBuilder::build_from_path(Path::new("/nonexistent/feeds.txt")).unwrap_err();
        assert!(matches!(err, RiskIntelError::InputNotFound(_)));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_write_snapshot_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/dataset.json");
        let dataset = DatasetBuilder::new("x").build_from_str(&bundle_text());
        write_snapshot(&dataset, &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("CRÍTICO"));
        let reloaded: Dataset = serde_json::from_str(&written).unwrap();
        assert_eq!(reloaded.wallets.len(), dataset.wallets.len());
    }
}
