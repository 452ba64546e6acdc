//! Customer API Handlers

use axum::extract::{Path, State};

use crate::api::{ApiResult, JsonBody};
use crate::core::ServerState;
use shared::ApiResponse;
use shared::models::{Customer, CustomerCreate};

/// GET /api/customers
pub async fn list(State(state): State<ServerState>) -> ApiResult<Vec<Customer>> {
    Ok(ApiResponse::ok(state.service.get_customers().await?))
}

/// GET /api/customers/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> ApiResult<Customer> {
    Ok(ApiResponse::ok(state.service.get_customer_by_id(&id).await?))
}

/// POST /api/customers
pub async fn create(
    State(state): State<ServerState>,
    JsonBody(payload): JsonBody<CustomerCreate>,
) -> ApiResult<Customer> {
    Ok(ApiResponse::ok(state.service.create_customer(payload).await?))
}
