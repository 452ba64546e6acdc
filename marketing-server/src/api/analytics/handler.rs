//! Analytics API Handlers

use axum::extract::State;

use crate::api::ApiResult;
use crate::core::ServerState;
use shared::ApiResponse;
use shared::models::{Analytics, CustomerAnalytics, RevenueAnalytics};

/// GET /api/analytics
pub async fn overview(State(state): State<ServerState>) -> ApiResult<Analytics> {
    Ok(ApiResponse::ok(state.service.get_analytics().await?))
}

/// GET /api/analytics/customers
pub async fn customers(State(state): State<ServerState>) -> ApiResult<CustomerAnalytics> {
    Ok(ApiResponse::ok(state.service.get_customer_analytics().await?))
}

/// GET /api/analytics/revenue
pub async fn revenue(State(state): State<ServerState>) -> ApiResult<RevenueAnalytics> {
    Ok(ApiResponse::ok(state.service.get_revenue_analytics().await?))
}
