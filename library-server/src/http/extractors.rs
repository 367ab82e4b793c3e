//! Custom Axum extractors

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::{BookId, ValidationError};

/// Extract and validate a book id from path
pub struct ValidBookId(pub BookId);

impl<S> FromRequestParts<S> for ValidBookId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::from(ValidationError::Required { field: "id" }))?;

        let id = raw.parse::<BookId>().map_err(|_| {
            ApiError::from(ValidationError::Invalid {
                field: "id",
                value: raw.clone(),
            })
        })?;

        Ok(Self(id))
    }
}

/// JSON body whose rejections render as `ApiError`
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| ApiError::InvalidBody {
                message: rejection.body_text(),
            })?;

        Ok(Self(value))
    }
}
