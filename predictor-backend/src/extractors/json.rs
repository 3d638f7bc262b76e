// predictor-backend/src/extractors/json.rs
use crate::error::AppError;
use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use tracing::warn;

/// 統一JSON Extractor
///
/// axum 標準の `Json` の拒否（415 / 422 など）を `AppError::BadRequest` に揃える。
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let path = req.uri().path().to_string();

        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                warn!(path = %path, error = %rejection.body_text(), "Malformed JSON body");
                AppError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
            })?;

        Ok(JsonBody(value))
    }
}
