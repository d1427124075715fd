use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::TransactionError;
use thiserror::Error;

use crate::templates::error_page;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid form data: {0}")]
    Validation(String),
}

impl From<TransactionError<AppError>> for AppError {
    fn from(err: TransactionError<AppError>) -> Self {
        match err {
            TransactionError::Connection(e) => Self::Database(e),
            TransactionError::Transaction(e) => e,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Database(ref e) => {
                tracing::error!("Database error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "A database error occurred.".to_string())
            }
            Self::NotFound(ref msg) => (StatusCode::NOT_FOUND, msg.clone()),
            Self::Validation(ref msg) => {
                tracing::warn!("Rejected form submission: {}", msg);
                (StatusCode::BAD_REQUEST, msg.clone())
            }
        };

        (status, error_page(status, &message)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
