//! Request extractors

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use shared::error::{AppError, ErrorCode};

/// JSON body whose rejections use the API envelope
///
/// Malformed or mistyped bodies become [`ErrorCode::InvalidFormat`] instead of
/// axum's plain-text rejection.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "Rejected request body");
                Err(AppError::with_message(
                    ErrorCode::InvalidFormat,
                    rejection.body_text(),
                ))
            }
        }
    }
}
