//! Unified error codes
//!
//! This module defines all error codes used by the marketing server, the
//! facade and the dashboard frontend. Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Menu errors
//! - 2xxx: Customer errors
//! - 3xxx: Review errors
//! - 4xxx: Campaign errors
//! - 5xxx: Content generation errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Menu ====================
    /// Menu category not found
    CategoryNotFound = 1001,
    /// Menu item not found
    MenuItemNotFound = 1002,
    /// Menu item has invalid price
    MenuItemInvalidPrice = 1003,
    /// Duplicate id inside a submitted menu
    MenuDuplicateId = 1004,

    // ==================== 2xxx: Customer ====================
    /// Customer not found
    CustomerNotFound = 2001,

    // ==================== 3xxx: Review ====================
    /// Review not found
    ReviewNotFound = 3001,
    /// Rating outside 1..=5
    ReviewInvalidRating = 3002,

    // ==================== 4xxx: Campaign ====================
    /// Campaign not found
    CampaignNotFound = 4001,
    /// Campaign date range is inverted
    CampaignInvalidDateRange = 4002,

    // ==================== 5xxx: Content ====================
    /// Content type tag is not supported
    UnsupportedContentType = 5001,
    /// Generated content not found
    ContentNotFound = 5002,
    /// Content generator failed
    GenerationFailed = 5003,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Upstream (external API) error
    UpstreamError = 9002,
    /// Network error
    NetworkError = 9003,
    /// Operation timeout
    TimeoutError = 9004,
    /// Configuration error
    ConfigError = 9005,
    /// Request cancelled before completion
    RequestCancelled = 9006,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Menu
            ErrorCode::CategoryNotFound => "Menu category not found",
            ErrorCode::MenuItemNotFound => "Menu item not found",
            ErrorCode::MenuItemInvalidPrice => "Menu item has invalid price",
            ErrorCode::MenuDuplicateId => "Menu contains a duplicate id",

            // Customer
            ErrorCode::CustomerNotFound => "Customer not found",

            // Review
            ErrorCode::ReviewNotFound => "Review not found",
            ErrorCode::ReviewInvalidRating => "Rating must be between 1 and 5",

            // Campaign
            ErrorCode::CampaignNotFound => "Campaign not found",
            ErrorCode::CampaignInvalidDateRange => "Campaign ends before it starts",

            // Content
            ErrorCode::UnsupportedContentType => "Unsupported content type",
            ErrorCode::ContentNotFound => "Generated content not found",
            ErrorCode::GenerationFailed => "Content generation failed",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::UpstreamError => "Upstream service error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::RequestCancelled => "Request was cancelled",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Menu
            1001 => Ok(ErrorCode::CategoryNotFound),
            1002 => Ok(ErrorCode::MenuItemNotFound),
            1003 => Ok(ErrorCode::MenuItemInvalidPrice),
            1004 => Ok(ErrorCode::MenuDuplicateId),

            // Customer
            2001 => Ok(ErrorCode::CustomerNotFound),

            // Review
            3001 => Ok(ErrorCode::ReviewNotFound),
            3002 => Ok(ErrorCode::ReviewInvalidRating),

            // Campaign
            4001 => Ok(ErrorCode::CampaignNotFound),
            4002 => Ok(ErrorCode::CampaignInvalidDateRange),

            // Content
            5001 => Ok(ErrorCode::UnsupportedContentType),
            5002 => Ok(ErrorCode::ContentNotFound),
            5003 => Ok(ErrorCode::GenerationFailed),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::UpstreamError),
            9003 => Ok(ErrorCode::NetworkError),
            9004 => Ok(ErrorCode::TimeoutError),
            9005 => Ok(ErrorCode::ConfigError),
            9006 => Ok(ErrorCode::RequestCancelled),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::NotFound.code(), 3);
        assert_eq!(ErrorCode::CategoryNotFound.code(), 1001);
        assert_eq!(ErrorCode::CustomerNotFound.code(), 2001);
        assert_eq!(ErrorCode::RequestCancelled.code(), 9006);
    }

    #[test]
    fn test_try_from_u16() {
        assert_eq!(ErrorCode::try_from(3002), Ok(ErrorCode::ReviewInvalidRating));
        assert_eq!(ErrorCode::try_from(5001), Ok(ErrorCode::UnsupportedContentType));
        assert_eq!(ErrorCode::try_from(7777), Err(InvalidErrorCode(7777)));
    }

    #[test]
    fn test_serde_as_number() {
        let json = serde_json::to_string(&ErrorCode::CustomerNotFound).unwrap();
        assert_eq!(json, "2001");
        let code: ErrorCode = serde_json::from_str("4002").unwrap();
        assert_eq!(code, ErrorCode::CampaignInvalidDateRange);
        assert!(serde_json::from_str::<ErrorCode>("42").is_err());
    }

    #[test]
    fn test_is_success() {
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::InternalError.is_success());
    }
}
