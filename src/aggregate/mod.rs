//! Per-address accumulation and finalization.

pub mod finalizer;
pub mod merger;

pub use finalizer::{finalize, format_timestamp, parse_timestamp};
pub use merger::{AggregateMerger, WalletAggregate};
