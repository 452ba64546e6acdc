//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Menu errors
/// - 2xxx: Customer errors
/// - 3xxx: Review errors
/// - 4xxx: Campaign errors
/// - 5xxx: Content generation errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Menu errors (1xxx)
    Menu,
    /// Customer errors (2xxx)
    Customer,
    /// Review errors (3xxx)
    Review,
    /// Campaign errors (4xxx)
    Campaign,
    /// Content generation errors (5xxx)
    Content,
    /// System errors (9xxx and anything unassigned)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Menu,
            2000..3000 => Self::Customer,
            3000..4000 => Self::Review,
            4000..5000 => Self::Campaign,
            5000..6000 => Self::Content,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Menu => "menu",
            Self::Customer => "customer",
            Self::Review => "review",
            Self::Campaign => "campaign",
            Self::Content => "content",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
