//! API Response types
//!
//! Wire envelope for the backend services. Every list/detail/create/update
//! endpoint wraps its payload as `{ "data": ... }`; some services also emit
//! `success` and `message` fields, which are tolerated but not required.

use serde::{Deserialize, Serialize};

/// Response envelope for successful calls
///
/// ```json
/// {
///     "success": true,
///     "message": "...",
///     "data": { ... }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Response payload
    pub data: Option<T>,
    /// Success flag (absent on some services)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    /// Human-readable message (absent on some services)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Wrap a payload (used by test fixtures)
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            success: Some(true),
            message: None,
        }
    }

    /// Take the payload, if present
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

/// Error body read from failed calls
///
/// The backends report failures as `{ "message": "..." }`, sometimes with
/// extra fields (status, path, timestamp) that the client ignores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// The reported message, or a generic fallback when the body carried none
    pub fn message_or_default(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| "Request failed".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_with_data_only() {
        let env: Envelope<Vec<i32>> = serde_json::from_str(r#"{"data":[1,2,3]}"#).unwrap();
        assert_eq!(env.data, Some(vec![1, 2, 3]));
        assert_eq!(env.success, None);
    }

    #[test]
    fn test_envelope_with_flags() {
        let env: Envelope<i32> =
            serde_json::from_str(r#"{"success":true,"message":"ok","data":7}"#).unwrap();
        assert_eq!(env.into_data(), Some(7));
    }

    #[test]
    fn test_error_body_fallback() {
        let body: ErrorBody = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(body.message_or_default(), "Request failed");

        let body: ErrorBody = serde_json::from_str(r#"{"message":"Table not found"}"#).unwrap();
        assert_eq!(body.message_or_default(), "Table not found");
    }
}
