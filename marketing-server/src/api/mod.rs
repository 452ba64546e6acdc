//! API 路由模块
//!
//! Every endpoint answers with the `{success, data, error, code?}` envelope.
//!
//! # 结构
//!
//! - [`health`] - 连接检查
//! - [`restaurant`] - 餐厅资料
//! - [`menu`] - 菜单、分类和菜品
//! - [`customers`] - 顾客
//! - [`reviews`] - 评价及回复
//! - [`campaigns`] - 营销活动
//! - [`analytics`] - 统计快照
//! - [`content`] - 内容生成

pub mod extract;
pub mod middleware;

pub mod analytics;
pub mod campaigns;
pub mod content;
pub mod customers;
pub mod health;
pub mod menu;
pub mod restaurant;
pub mod reviews;

use axum::Router;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;
use shared::{ApiResponse, AppResult};

pub use extract::JsonBody;

/// Handler return type: envelope on success, [`shared::AppError`] otherwise
pub type ApiResult<T> = AppResult<ApiResponse<T>>;

const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// All routes, no middleware, no state
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(restaurant::router())
        .merge(menu::router())
        .merge(customers::router())
        .merge(reviews::router())
        .merge(campaigns::router())
        .merge(analytics::router())
        .merge(content::router())
}

/// Routes plus the HTTP middleware stack
///
/// Used by the server and by in-process tests.
pub fn build_app() -> Router<ServerState> {
    build_router().layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::new(
                HeaderName::from_static(REQUEST_ID_HEADER),
                XRequestId,
            ))
            .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
                REQUEST_ID_HEADER,
            )))
            .layer(TraceLayer::new_for_http())
            .layer(axum_middleware::from_fn(middleware::logging_middleware))
            .layer(CompressionLayer::new())
            .layer(CorsLayer::permissive()),
    )
}
