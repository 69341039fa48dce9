pub mod config;
pub mod domain;
pub mod errors;

pub use config::Settings;
pub use domain::{
    CanonicalWalletRecord, CitationKey, Dataset, DatasetMetadata, EvidenceCitation, RiskLevel,
    UNKNOWN_NETWORK,
};
pub use errors::{Result, RiskIntelError};
