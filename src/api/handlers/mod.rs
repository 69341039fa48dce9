pub mod health;
pub mod wallet;

pub use health::health_check;
pub use wallet::{dataset_metadata, verify_wallet};
