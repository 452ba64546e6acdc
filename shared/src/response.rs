//! API Response types
//!
//! A single response envelope for every facade call and HTTP endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::error::{AppError, AppResult, ErrorCode};

/// Unified API response structure
///
/// All API responses follow this format:
/// ```json
/// {
///     "success": true,
///     "data": { ... },
///     "error": null
/// }
/// ```
///
/// Failures carry `data: null`, the message in `error`, the numeric
/// [`ErrorCode`] in `code` and, when present, field-level `details`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    /// Error code (errors only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<ErrorCode>,
    /// Additional error details (errors only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            code: None,
            details: None,
        }
    }
}

impl<T> From<AppError> for ApiResponse<T> {
    fn from(err: AppError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(err.message),
            code: Some(err.code),
            details: err.details,
        }
    }
}

impl<T> From<AppResult<T>> for ApiResponse<T> {
    fn from(result: AppResult<T>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(err) => err.into(),
        }
    }
}

impl<T: Serialize> axum::response::IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = match self.code {
            Some(code) if !self.success => code.http_status(),
            _ => http::StatusCode::OK,
        };

        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ok_envelope_shape() {
        let resp = ApiResponse::ok(json!({"name": "Trattoria"}));
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(
            value,
            json!({"success": true, "data": {"name": "Trattoria"}, "error": null})
        );
    }

    #[test]
    fn test_error_envelope_shape() {
        let result: AppResult<u32> =
            Err(AppError::missing(ErrorCode::CustomerNotFound, "cust-404"));
        let resp = ApiResponse::from(result);
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(
            value,
            json!({
                "success": false,
                "data": null,
                "error": "Customer not found",
                "code": 2001,
                "details": {"id": "cust-404"}
            })
        );
    }

    #[test]
    fn test_error_envelope_carries_details() {
        let err = AppError::validation("Invalid fields: email")
            .with_detail("email", json!(["must be a valid email address"]));
        let value = serde_json::to_value(ApiResponse::<()>::from(err)).unwrap();
        assert_eq!(value["code"], 2);
        assert_eq!(value["details"]["email"][0], "must be a valid email address");

        let plain = AppError::with_message(ErrorCode::InvalidFormat, "bad");
        let plain = serde_json::to_value(ApiResponse::<()>::from(plain)).unwrap();
        assert!(plain.get("details").is_none());
    }
}
