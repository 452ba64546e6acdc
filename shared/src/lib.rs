//! Shared types for the restaurant marketing platform
//!
//! Domain models, the unified error type and the API response envelope used
//! by the marketing server and its clients.

pub mod error;
pub mod models;
pub mod response;
pub mod util;

// Re-exports
pub use axum::Json;
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use response::ApiResponse;
pub use serde::{Deserialize, Serialize};
