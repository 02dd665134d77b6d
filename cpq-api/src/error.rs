use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use cpq_catalog::PricingError;
use cpq_quote::QuoteError;

/// Request failures, rendered as plain-text bodies
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            }
        };

        (status, error_message).into_response()
    }
}

impl From<PricingError> for AppError {
    fn from(err: PricingError) -> Self {
        match err {
            PricingError::ProductNotFound(_) => AppError::NotFound(err.to_string()),
            PricingError::InvalidQuantity | PricingError::InvalidTerm => {
                AppError::Validation(err.to_string())
            }
        }
    }
}

impl From<QuoteError> for AppError {
    fn from(err: QuoteError) -> Self {
        match err {
            QuoteError::InvalidRequest(_) => AppError::Validation(err.to_string()),
            QuoteError::CustomerNotFound(_)
            | QuoteError::ProductNotFound(_)
            | QuoteError::NotFound(_) => AppError::NotFound(err.to_string()),
            QuoteError::Storage(_) => AppError::Internal(err.to_string()),
        }
    }
}
