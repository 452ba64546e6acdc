//! Menu API Handlers

use axum::extract::{Path, Query, State};
use serde::Deserialize;

use crate::api::{ApiResult, JsonBody};
use crate::core::ServerState;
use shared::ApiResponse;
use shared::models::{Menu, MenuItem, MenuItemCreate, MenuItemUpdate};

#[derive(Debug, Deserialize)]
pub struct ItemsQuery {
    pub category_id: Option<String>,
}

/// GET /api/menu - 完整菜单
pub async fn get_menu(State(state): State<ServerState>) -> ApiResult<Menu> {
    Ok(ApiResponse::ok(state.service.get_menu_data().await?))
}

/// PUT /api/menu - 整体替换菜单
pub async fn save_menu(
    State(state): State<ServerState>,
    JsonBody(menu): JsonBody<Menu>,
) -> ApiResult<Menu> {
    Ok(ApiResponse::ok(state.service.save_menu_data(menu).await?))
}

/// GET /api/menu/items?category_id= - 菜品列表 (可按分类过滤)
pub async fn list_items(
    State(state): State<ServerState>,
    Query(query): Query<ItemsQuery>,
) -> ApiResult<Vec<MenuItem>> {
    let items = state
        .service
        .get_menu_items(query.category_id.as_deref())
        .await?;
    Ok(ApiResponse::ok(items))
}

/// POST /api/menu/categories/{category_id}/items - 新增菜品
///
/// `data` is null when the category does not exist and missing references
/// are ignored.
pub async fn create_item(
    State(state): State<ServerState>,
    Path(category_id): Path<String>,
    JsonBody(payload): JsonBody<MenuItemCreate>,
) -> ApiResult<Option<MenuItem>> {
    let item = state
        .service
        .create_menu_item(&category_id, payload)
        .await?;
    Ok(ApiResponse::ok(item))
}

/// PUT /api/menu/items/{item_id} - 更新菜品
///
/// `data` is null when the item does not exist and missing references are
/// ignored.
pub async fn update_item(
    State(state): State<ServerState>,
    Path(item_id): Path<String>,
    JsonBody(payload): JsonBody<MenuItemUpdate>,
) -> ApiResult<Option<MenuItem>> {
    let item = state.service.update_menu_item(&item_id, payload).await?;
    Ok(ApiResponse::ok(item))
}
