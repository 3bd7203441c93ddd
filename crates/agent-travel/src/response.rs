//! Status envelope returned by every travel tool

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// Tool result as seen by the host runtime
///
/// Serializes as `{"status": "success", ...payload}` or
/// `{"status": "error", "error_message": "..."}`. The payload's fields are
/// inlined next to `status`, so payloads must be structs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ToolResponse<T> {
    Success(T),
    Error { error_message: String },
}

impl<T> ToolResponse<T> {
    pub fn success(payload: T) -> Self {
        Self::Success(payload)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            error_message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Value of the `status` field
    pub fn status(&self) -> &'static str {
        match self {
            Self::Success(_) => "success",
            Self::Error { .. } => "error",
        }
    }

    pub fn payload(&self) -> Option<&T> {
        match self {
            Self::Success(payload) => Some(payload),
            Self::Error { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Error { error_message } => Some(error_message),
        }
    }
}

impl<T: Serialize> ToolResponse<T> {
    /// Convert to the JSON object handed back to the host
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Payload carrying a single human-readable sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub report: String,
}

/// Payload carrying a confirmation message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_inlines_payload() {
        let response = ToolResponse::success(Report {
            report: "Sunny".to_string(),
        });
        assert_eq!(
            response.to_value().unwrap(),
            json!({ "status": "success", "report": "Sunny" })
        );
        assert_eq!(response.status(), "success");
    }

    #[test]
    fn test_error_shape() {
        let response: ToolResponse<Notice> = ToolResponse::error("nope");
        assert_eq!(
            response.to_value().unwrap(),
            json!({ "status": "error", "error_message": "nope" })
        );
        assert!(!response.is_success());
        assert!(response.payload().is_none());
        assert_eq!(response.error_message(), Some("nope"));
    }

    #[test]
    fn test_parse_from_host() {
        let parsed: ToolResponse<Notice> =
            serde_json::from_value(json!({ "status": "success", "message": "ok" })).unwrap();
        assert_eq!(
            parsed,
            ToolResponse::success(Notice {
                message: "ok".to_string()
            })
        );
    }
}
