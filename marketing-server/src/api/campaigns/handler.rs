//! Campaign API Handlers

use axum::extract::State;

use crate::api::{ApiResult, JsonBody};
use crate::core::ServerState;
use shared::ApiResponse;
use shared::models::{Campaign, CampaignCreate};

/// GET /api/campaigns
pub async fn list(State(state): State<ServerState>) -> ApiResult<Vec<Campaign>> {
    Ok(ApiResponse::ok(state.service.get_campaigns().await?))
}

/// POST /api/campaigns
pub async fn create(
    State(state): State<ServerState>,
    JsonBody(payload): JsonBody<CampaignCreate>,
) -> ApiResult<Campaign> {
    Ok(ApiResponse::ok(state.service.create_campaign(payload).await?))
}
