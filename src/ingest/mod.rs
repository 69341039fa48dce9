//! Feed ingestion: value extraction, network inference, risk vocabulary and
//! the per-feed normalizers.

pub mod extractor;
pub mod network;
pub mod risk;
pub mod sources;

pub use extractor::{extract_values, ValueStream};
pub use network::guess_network;
pub use risk::{category_risk, normalize_risk_level, score_to_level};
pub use sources::{AddressUpdate, SourceNormalizer, WalletUpdate};
