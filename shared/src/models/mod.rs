//! Data models
//!
//! Shared between the marketing server and the dashboard frontend (via API).
//! All IDs are prefixed strings (`customer-<uuid>`); timestamps are Unix millis.

pub mod analytics;
pub mod campaign;
pub mod content;
pub mod customer;
pub mod menu;
pub mod restaurant;
pub mod review;

// Re-exports
pub use analytics::*;
pub use campaign::*;
pub use content::*;
pub use customer::*;
pub use menu::*;
pub use restaurant::*;
pub use review::*;
