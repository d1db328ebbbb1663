//! Response types for the Travel Settlement Engine API.
//!
//! This module defines the success and error response structures and maps
//! engine errors onto HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::SettlementError;
use crate::models::DailyRecord;

/// Response body for the `/parse` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ParseResponse {
    /// Daily records ordered by person, then date.
    pub records: Vec<DailyRecord>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Message suitable for showing to the user.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<SettlementError> for ApiErrorResponse {
    fn from(error: SettlementError) -> Self {
        let message = error.user_message();
        let (status, code) = match &error {
            SettlementError::NoDataFound => (StatusCode::UNPROCESSABLE_ENTITY, "NO_DATA_FOUND"),
            SettlementError::InvalidDistance { .. } | SettlementError::InvalidDate { .. } => {
                (StatusCode::BAD_REQUEST, "PARSE_ERROR")
            }
            SettlementError::CalculationError { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "CALCULATION_ERROR")
            }
            SettlementError::ConfigNotFound { .. }
            | SettlementError::ConfigParseError { .. }
            | SettlementError::InvalidPattern { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR")
            }
        };

        let error = match error {
            SettlementError::NoDataFound => ApiError::new(code, message),
            other => ApiError::with_details(code, message, other.to_string()),
        };

        ApiErrorResponse { status, error }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NO_DATA_MESSAGE;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_no_data_maps_to_422() {
        let response: ApiErrorResponse = SettlementError::NoDataFound.into();
        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.error.code, "NO_DATA_FOUND");
        assert_eq!(response.error.message, NO_DATA_MESSAGE);
        assert!(response.error.details.is_none());
    }

    #[test]
    fn test_invalid_date_maps_to_parse_error() {
        let response: ApiErrorResponse = SettlementError::InvalidDate {
            line_number: 3,
            text: "13/1".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "PARSE_ERROR");
        assert!(response.error.message.starts_with("エラーが発生しました"));
        assert_eq!(
            response.error.details.as_deref(),
            Some("Invalid date '13/1' on line 3")
        );
    }

    #[test]
    fn test_calculation_error_maps_to_500() {
        let response: ApiErrorResponse = SettlementError::CalculationError {
            message: "overflow".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.error.code, "CALCULATION_ERROR");
    }

    #[test]
    fn test_config_errors_map_to_500() {
        let errors = vec![
            SettlementError::ConfigNotFound {
                path: "/missing/rates.yaml".to_string(),
            },
            SettlementError::ConfigParseError {
                path: "/config/settlement.yaml".to_string(),
                message: "entry_marker must not be empty".to_string(),
            },
            SettlementError::InvalidPattern {
                message: "unclosed group".to_string(),
            },
        ];

        for error in errors {
            let details = error.to_string();
            let response: ApiErrorResponse = error.into();
            assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(response.error.code, "CONFIG_ERROR");
            assert_eq!(response.error.details.as_deref(), Some(details.as_str()));
        }
    }

    #[test]
    fn test_error_response_carries_status_and_json_body() {
        let response = ApiErrorResponse::from(SettlementError::NoDataFound).into_response();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            response.headers()[axum::http::header::CONTENT_TYPE],
            "application/json"
        );
    }
}
