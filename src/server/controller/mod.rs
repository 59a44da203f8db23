//! HTTP request handlers.
//!
//! Handlers convert request DTOs into params, call the matching service and map the
//! result to a status code. Empty collections answer `204 No Content`.

pub mod course;
pub mod house;
pub mod student;
pub mod teacher;

#[cfg(test)]
mod test;

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};

use crate::server::error::AppError;

/// JSON request body that rejects with the API's `{"error": ..}` shape.
///
/// Wraps `axum::Json` so malformed or mistyped bodies become `AppError::BadRequest`
/// instead of axum's plain-text rejection.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;

        Ok(Self(value))
    }
}
