//! Server configuration constants

use std::time::Duration;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;

/// Concurrent request limit
pub const MAX_CONCURRENCY: usize = 256;

/// Request body limit; verify payloads are a single address
pub const MAX_BODY_SIZE: usize = 16 * 1024;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Minimum address length accepted by the verify endpoint, after trimming
pub const MIN_ADDRESS_LENGTH: usize = 4;
