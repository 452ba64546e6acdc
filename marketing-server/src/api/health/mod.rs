//! 连接检查路由
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/health | GET | 连接检查 (含模拟延迟) |

use axum::{Router, extract::State, routing::get};

use super::ApiResult;
use crate::core::ServerState;
use crate::service::ConnectionInfo;
use shared::ApiResponse;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/health", get(health))
}

/// GET /api/health
async fn health(State(state): State<ServerState>) -> ApiResult<ConnectionInfo> {
    let info = state.service.test_connection().await?;
    Ok(ApiResponse::ok(info))
}
