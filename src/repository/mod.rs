//! Snapshot loading and address lookups for the serving side.

pub mod index;
pub mod source;
pub mod wallet_repository;

pub use index::WalletIndex;
pub use source::{DatasetSource, FileDatasetSource, MemoryDatasetSource};
pub use wallet_repository::WalletRepository;
