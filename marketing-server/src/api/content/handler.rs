//! Generated Content API Handlers

use axum::extract::{Path, State};

use crate::api::{ApiResult, JsonBody};
use crate::core::ServerState;
use shared::ApiResponse;
use shared::models::{GenerateContentRequest, GeneratedContent};

/// GET /api/content - 已生成内容 (按生成顺序)
pub async fn list(State(state): State<ServerState>) -> ApiResult<Vec<GeneratedContent>> {
    Ok(ApiResponse::ok(state.service.get_generated_content().await?))
}

/// POST /api/content/generate
pub async fn generate(
    State(state): State<ServerState>,
    JsonBody(payload): JsonBody<GenerateContentRequest>,
) -> ApiResult<GeneratedContent> {
    let content = state
        .service
        .generate_content(&payload.content_type, payload.params)
        .await?;
    Ok(ApiResponse::ok(content))
}

/// POST /api/content/{id}/apply
pub async fn apply(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> ApiResult<GeneratedContent> {
    Ok(ApiResponse::ok(state.service.apply_generated_content(&id).await?))
}
