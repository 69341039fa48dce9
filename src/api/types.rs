use serde::{Deserialize, Serialize};

pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_ERROR: &str = "error";

/// Body of `POST {prefix}/wallets/verify`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerifyWalletRequest {
    /// Address to evaluate; surrounding whitespace is ignored
    pub address: String,
}

/// One rejected request field.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Uniform response envelope.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiResponse<T> {
    pub status: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            message: message.into(),
            data: Some(data),
            errors: None,
        }
    }

    pub fn failure(message: impl Into<String>, errors: Option<Vec<FieldError>>) -> Self {
        Self {
            status: STATUS_ERROR.to_string(),
            message: message.into(),
            data: None,
            errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_envelope_omits_data() {
        let body: ApiResponse<()> = ApiResponse::failure("bad", None);
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["status"], "error");
        assert!(value.get("data").is_none());
        assert!(value.get("errors").is_none());
    }

    #[test]
    fn test_success_envelope_carries_data() {
        let value = serde_json::to_value(ApiResponse::success("ok", 3)).unwrap();
        assert_eq!(value["status"], "success");
        assert_eq!(value["data"], 3);
    }
}
