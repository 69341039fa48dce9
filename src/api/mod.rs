//! HTTP surface over the verification use case.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod server;
pub mod server_config;
pub mod types;
pub mod validators;

pub use server::{AppState, RiskApiServer};
