//! Request validation shared by the handlers.

use crate::api::server_config::MIN_ADDRESS_LENGTH;
use crate::api::types::FieldError;

/// Trim and length-check a queried address.
///
/// Length counts characters, not bytes.
pub fn validate_address(raw: &str) -> Result<&str, FieldError> {
    let address = raw.trim();
    if address.chars().count() < MIN_ADDRESS_LENGTH {
        return Err(FieldError {
            field: "address".to_string(),
            message: format!(
                "address must contain at least {} characters",
                MIN_ADDRESS_LENGTH
            ),
        });
    }
    Ok(address)
}
