//! Restaurant Profile API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route(
        "/api/restaurants/{user_id}/profile",
        get(handler::get).put(handler::update),
    )
}
