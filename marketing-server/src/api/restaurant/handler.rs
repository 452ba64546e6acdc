//! Restaurant Profile API Handlers

use axum::extract::{Path, State};

use crate::api::{ApiResult, JsonBody};
use crate::core::ServerState;
use shared::ApiResponse;
use shared::models::{RestaurantProfile, RestaurantUpdate};

/// GET /api/restaurants/{user_id}/profile
pub async fn get(
    State(state): State<ServerState>,
    Path(user_id): Path<String>,
) -> ApiResult<RestaurantProfile> {
    let profile = state.service.get_restaurant_profile(&user_id).await?;
    Ok(ApiResponse::ok(profile))
}

/// PUT /api/restaurants/{user_id}/profile - 部分更新
pub async fn update(
    State(state): State<ServerState>,
    Path(user_id): Path<String>,
    JsonBody(payload): JsonBody<RestaurantUpdate>,
) -> ApiResult<RestaurantProfile> {
    let profile = state
        .service
        .update_restaurant_profile(&user_id, payload)
        .await?;
    Ok(ApiResponse::ok(profile))
}
