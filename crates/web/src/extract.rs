use axum::extract::FromRequest;

use crate::error::WebError;

/// `Json` extractor that rejects malformed bodies with `WebError::BadRequest`
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(WebError))]
pub struct AppJson<T>(pub T);
