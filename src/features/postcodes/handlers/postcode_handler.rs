use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppQuery;
use crate::features::postcodes::dtos::{
    AutocompleteQuery, AutocompleteResponseDto, ValidateQuery, ValidateResponseDto,
};
use crate::features::postcodes::services::PostcodeService;
use crate::shared::types::ApiErrorResponse;

/// Suggest postal records whose suburb contains the query
#[utoipa::path(
    get,
    path = "/autocomplete",
    params(AutocompleteQuery),
    responses(
        (status = 200, description = "Matching records in dataset order", body = AutocompleteResponseDto),
        (status = 422, description = "Missing or too short query", body = ApiErrorResponse),
        (status = 500, description = "Dataset unavailable or malformed", body = ApiErrorResponse)
    ),
    tag = "postcodes"
)]
pub async fn autocomplete(
    State(service): State<Arc<PostcodeService>>,
    AppQuery(params): AppQuery<AutocompleteQuery>,
) -> Result<Json<AutocompleteResponseDto>> {
    params
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let records = service.autocomplete(&params.query).await?;
    Ok(Json(AutocompleteResponseDto {
        results: records.into_iter().map(Into::into).collect(),
    }))
}

/// Validate a suburb/area combination
#[utoipa::path(
    get,
    path = "/validate",
    params(ValidateQuery),
    responses(
        (status = 200, description = "Exact match details, or suggestions when there is none", body = ValidateResponseDto),
        (status = 422, description = "Missing or too short suburb/area", body = ApiErrorResponse),
        (status = 500, description = "Dataset unavailable or malformed", body = ApiErrorResponse)
    ),
    tag = "postcodes"
)]
pub async fn validate(
    State(service): State<Arc<PostcodeService>>,
    AppQuery(params): AppQuery<ValidateQuery>,
) -> Result<Json<ValidateResponseDto>> {
    params
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let outcome = service.validate(&params.suburb, &params.area).await?;
    Ok(Json(outcome.into()))
}
