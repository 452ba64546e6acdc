//! Analytics snapshot (read-only projection)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    /// YYYY-MM
    pub month: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub revenue: Decimal,
    pub orders: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelRevenue {
    pub channel: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub revenue: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueAnalytics {
    #[serde(with = "rust_decimal::serde::float")]
    pub total_revenue: Decimal,
    /// Month over month, percent
    pub monthly_growth: f64,
    #[serde(with = "rust_decimal::serde::float")]
    pub average_order_value: Decimal,
    pub total_orders: u32,
    pub by_month: Vec<MonthlyRevenue>,
    pub by_channel: Vec<ChannelRevenue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentShare {
    pub segment: String,
    pub count: u32,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerAnalytics {
    pub total_customers: u32,
    pub new_this_month: u32,
    /// Percent
    pub retention_rate: f64,
    /// Percent
    pub churn_rate: f64,
    #[serde(with = "rust_decimal::serde::float")]
    pub average_lifetime_value: Decimal,
    pub segments: Vec<SegmentShare>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemPerformance {
    pub item_id: String,
    pub name: String,
    pub orders: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub revenue: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuPerformance {
    pub top_items: Vec<ItemPerformance>,
    pub low_performers: Vec<ItemPerformance>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingTrend {
    pub month: String,
    pub average_rating: f64,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewAnalytics {
    pub average_rating: f64,
    pub total_reviews: u32,
    pub monthly_trend: Vec<RatingTrend>,
}

/// Aggregate snapshot
///
/// Seeded once and never recomputed from the live customer, review or
/// campaign collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analytics {
    pub revenue: RevenueAnalytics,
    pub customers: CustomerAnalytics,
    pub menu_performance: MenuPerformance,
    pub reviews: ReviewAnalytics,
}
