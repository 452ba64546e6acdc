//! Unified error system
//!
//! This module provides the error handling used across the workspace:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Menu errors
//! - 2xxx: Customer errors
//! - 3xxx: Review errors
//! - 4xxx: Campaign errors
//! - 5xxx: Content generation errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//! use shared::response::ApiResponse;
//!
//! // Create a simple error
//! let err = AppError::new(ErrorCode::NotFound);
//!
//! // Create an error with details
//! let err = AppError::validation("Rating must be between 1 and 5")
//!     .with_detail("field", "rating");
//!
//! // Convert to the API envelope
//! let response = ApiResponse::<()>::from(err);
//! assert!(!response.success);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
