use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::nik::dtos::{BirthDateResponseDto, NikRequestDto, NikValidationResponseDto};
use crate::features::nik::services::NikService;
use crate::shared::types::ApiResponse;

/// Validate and decode a NIK
///
/// Decoding problems are returned as data (`valid = false` with messages),
/// not as HTTP errors.
#[utoipa::path(
    post,
    path = "/api/nik/validate",
    request_body = NikRequestDto,
    responses(
        (status = 200, description = "Validation result", body = ApiResponse<NikValidationResponseDto>),
        (status = 400, description = "Malformed request body")
    ),
    tag = "nik"
)]
pub async fn validate_nik(
    State(service): State<Arc<NikService>>,
    AppJson(dto): AppJson<NikRequestDto>,
) -> Result<Json<ApiResponse<NikValidationResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let result = service.validate(&dto.nik);
    Ok(Json(ApiResponse::success(Some(result.into()), None, None)))
}

/// Extract the birth date from a NIK without full validation
#[utoipa::path(
    post,
    path = "/api/nik/birth-date",
    request_body = NikRequestDto,
    responses(
        (status = 200, description = "Decoded birth date, or null", body = ApiResponse<BirthDateResponseDto>),
        (status = 400, description = "Malformed request body")
    ),
    tag = "nik"
)]
pub async fn extract_birth_date(
    State(service): State<Arc<NikService>>,
    AppJson(dto): AppJson<NikRequestDto>,
) -> Result<Json<ApiResponse<BirthDateResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let birth_date = service.extract_birth_date(&dto.nik);
    Ok(Json(ApiResponse::success(
        Some(BirthDateResponseDto { birth_date }),
        None,
        None,
    )))
}
