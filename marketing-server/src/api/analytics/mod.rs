//! Analytics API 模块
//!
//! Read-only snapshot, not recomputed from live data.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/analytics", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::overview))
        .route("/customers", get(handler::customers))
        .route("/revenue", get(handler::revenue))
}
