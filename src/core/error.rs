use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::features::postcodes::sources::DatasetError;
use crate::shared::types::ApiErrorResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match self {
            AppError::Dataset(ref e @ DatasetError::Source { .. }) => {
                tracing::error!("Dataset source error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Postal code dataset is unavailable".to_string(),
                    None,
                )
            }
            AppError::Dataset(ref e @ DatasetError::Format { .. }) => {
                tracing::error!("Dataset format error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Postal code dataset is malformed".to_string(),
                    None,
                )
            }
            AppError::Validation(ref msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                msg.clone(),
                Some(vec![msg.clone()]),
            ),
        };

        let body = Json(ApiErrorResponse::new(Some(message), errors));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
