//! Risk-level vocabulary and category tables shared by the source normalizers.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::RiskLevel;

/// Scam category -> risk level. Lookup is exact; see `category_risk`.
pub const CATEGORY_RISK_TABLE: &[(&str, RiskLevel)] = &[
    ("CONTRACT_EXPLOIT", RiskLevel::Critical),
    ("OTHER_HACK", RiskLevel::Critical),
    ("RUG_PULL", RiskLevel::Critical),
    ("HACK", RiskLevel::Critical),
    ("PIGBUTCHERING", RiskLevel::High),
    ("PIG_BUTCHERING", RiskLevel::High),
    ("PHISHING", RiskLevel::High),
    ("SEXTORTION", RiskLevel::High),
    ("DONATION_SCAM", RiskLevel::Medium),
    ("FAKE_PROJECT", RiskLevel::Medium),
    ("ROMANCE", RiskLevel::Medium),
    ("IMPERSONATION", RiskLevel::Medium),
    ("FAKE_RETURNS", RiskLevel::Medium),
    ("AIRDROP", RiskLevel::Low),
    ("OTHER", RiskLevel::Medium),
];

/// Spelling and language variants accepted for the canonical labels.
const LEVEL_ALIASES: &[(&str, RiskLevel)] = &[
    ("CRITICO", RiskLevel::Critical),
    ("CRITICAL", RiskLevel::Critical),
    ("ALTA", RiskLevel::High),
    ("MEDIA", RiskLevel::Medium),
    ("BAJA", RiskLevel::Low),
];

/// Inclusive lower edges of the scored feed buckets.
pub const HIGH_SCORE_THRESHOLD: f64 = 0.9;
pub const MEDIUM_SCORE_THRESHOLD: f64 = 0.4;

static CATEGORY_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Z][A-Z_]+").expect("Hardcoded regex should always compile"));

/// Map free text onto the four canonical levels. Anything outside the
/// vocabulary normalizes to `None`.
pub fn normalize_risk_level(level: Option<&str>) -> Option<RiskLevel> {
    let trimmed = level?.trim();
    if trimmed.is_empty() {
        return None;
    }
    let upper = trimmed.to_uppercase();
    LEVEL_ALIASES
        .iter()
        .find(|(alias, _)| *alias == upper)
        .map(|(_, level)| *level)
        .or_else(|| RiskLevel::from_label(&upper))
}

/// Risk implied by a reported scam category. Unrecognized categories are
/// treated like "OTHER".
pub fn category_risk(category: &str) -> RiskLevel {
    CATEGORY_RISK_TABLE
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, level)| *level)
        .unwrap_or(RiskLevel::Medium)
}

/// Three-bucket thresholding for scored feeds.
pub fn score_to_level(score: f64) -> RiskLevel {
    if score >= HIGH_SCORE_THRESHOLD {
        RiskLevel::High
    } else if score >= MEDIUM_SCORE_THRESHOLD {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Category tokens mentioned in free text.
///
/// Known categories found as substrings come first, in table order, followed
/// by any other underscore-joined uppercase words in order of appearance.
pub fn parse_category_tokens(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    let upper = text.to_uppercase();
    let mut tokens: Vec<String> = CATEGORY_RISK_TABLE
        .iter()
        .filter(|(name, _)| upper.contains(name))
        .map(|(name, _)| name.to_string())
        .collect();

    for found in CATEGORY_TOKEN.find_iter(&upper) {
        let token = found.as_str();
        if token.contains('_') && !tokens.iter().any(|t| t == token) {
            tokens.push(token.to_string());
        }
    }
    tokens
}

/// Text before the first `-`, used as the level segment of detail strings.
pub fn level_segment(detail: &str) -> &str {
    detail.split('-').next().unwrap_or(detail)
}

/// Contents of the first non-empty parenthesised group, trimmed and
/// uppercased. A group holding only whitespace yields an empty tag, which is
/// distinct from having no group at all.
pub fn parenthetical_tag(detail: &str) -> Option<String> {
    let mut search = detail;
    loop {
        let open = search.find('(')?;
        let rest = &search[open + 1..];
        let close = rest.find(')')?;
        if close == 0 {
            // empty group, keep looking
            search = &rest[1..];
            continue;
        }
        return Some(rest[..close].trim().to_uppercase());
    }
}
