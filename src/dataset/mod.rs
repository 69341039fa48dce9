//! Offline dataset generation.

pub mod builder;

pub use builder::{write_snapshot, DatasetBuilder, FeedBundle};
