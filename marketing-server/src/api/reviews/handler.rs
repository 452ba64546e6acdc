//! Review API Handlers

use axum::extract::{Path, State};

use crate::api::{ApiResult, JsonBody};
use crate::core::ServerState;
use shared::ApiResponse;
use shared::models::{Review, ReviewCreate, ReviewResponseCreate, ReviewSummary};

/// GET /api/reviews
pub async fn list(State(state): State<ServerState>) -> ApiResult<Vec<Review>> {
    Ok(ApiResponse::ok(state.service.get_reviews().await?))
}

/// GET /api/reviews/summary - 实时统计
pub async fn summary(State(state): State<ServerState>) -> ApiResult<ReviewSummary> {
    Ok(ApiResponse::ok(state.service.get_review_summary().await?))
}

/// POST /api/reviews
pub async fn create(
    State(state): State<ServerState>,
    JsonBody(payload): JsonBody<ReviewCreate>,
) -> ApiResult<Review> {
    Ok(ApiResponse::ok(state.service.add_review(payload).await?))
}

/// POST /api/reviews/{id}/response - 商家回复
pub async fn respond(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<ReviewResponseCreate>,
) -> ApiResult<Review> {
    let review = state.service.respond_to_review(&id, payload).await?;
    Ok(ApiResponse::ok(review))
}
