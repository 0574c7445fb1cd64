use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` whose rejections come back as a 400 `{error}` body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
