//! Menu API 模块

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/menu", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::get_menu).put(handler::save_menu))
        .route("/items", get(handler::list_items))
        .route("/items/{item_id}", put(handler::update_item))
        .route("/categories/{category_id}/items", post(handler::create_item))
}
