use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

/// Failures raised by a [`LinkStore`](crate::store::LinkStore) implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("short code `{0}` already exists")]
    DuplicateCode(String),

    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("corrupt link record: {0}")]
    Corrupt(String),
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Short code already exists. Choose another.")]
    Conflict,

    #[error("Link not found")]
    NotFound,

    #[error("Database error")]
    Store(#[source] StoreError),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateCode(_) => ApiError::Conflict,
            other => ApiError::Store(other),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict => StatusCode::CONFLICT,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Store(source) = self {
            log::error!("Store failure: {}", source);
        }

        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.to_string()
        }))
    }
}
