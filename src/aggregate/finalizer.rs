//! Aggregate → canonical record.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};

use super::merger::WalletAggregate;
use crate::core::{CanonicalWalletRecord, UNKNOWN_NETWORK};

/// Naive layouts accepted after RFC 3339 fails; interpreted as UTC.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Parse a feed timestamp. Offsets are honored; naive values are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// ISO-8601 in UTC with a `Z` suffix.
pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Turn one aggregate into its immutable record.
///
/// Level is the highest contributed tier. Lists come out sorted. A wallet with
/// no network gets `DESCONOCIDA`. `first_seen`/`last_seen` span the parseable
/// citation timestamps; unparseable ones are ignored.
pub fn finalize(aggregate: WalletAggregate) -> CanonicalWalletRecord {
    let risk_level = aggregate.risk_levels.iter().next_back().copied();

    let networks: Vec<String> = if aggregate.networks.is_empty() {
        vec![UNKNOWN_NETWORK.to_string()]
    } else {
        aggregate.networks.into_iter().collect()
    };

    let timestamps: Vec<DateTime<Utc>> = aggregate
        .sources
        .iter()
        .filter_map(|citation| citation.created_at.as_deref())
        .filter_map(parse_timestamp)
        .collect();
    let first_seen = timestamps.iter().min().map(format_timestamp);
    let last_seen = timestamps.iter().max().map(format_timestamp);

    CanonicalWalletRecord {
        address: aggregate.address,
        networks,
        risk_level,
        risk_score: aggregate.risk_score,
        scam_categories: aggregate.scam_categories.into_iter().collect(),
        domains: aggregate.domains.into_iter().collect(),
        sources: aggregate.sources,
        first_seen,
        last_seen,
    }
}
