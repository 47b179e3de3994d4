use axum::extract::FromRequest;

use crate::errors::AppError;

/// `axum::Json` whose rejections are reported through `AppError`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ValidatedJson<T>(pub T);
