use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::nik::models::{NikInfo, NikValidationResult};

/// Request DTO carrying a candidate NIK
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NikRequestDto {
    #[validate(length(max = 64, message = "NIK must not exceed 64 characters"))]
    #[schema(example = "3273010101990001")]
    pub nik: String,
}

/// Response DTO for NIK validation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NikValidationResponseDto {
    pub valid: bool,
    /// Indonesian messages ready for display, empty when valid
    pub errors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<NikInfo>,
}

impl From<NikValidationResult> for NikValidationResponseDto {
    fn from(result: NikValidationResult) -> Self {
        match result {
            NikValidationResult::Valid(info) => Self {
                valid: true,
                errors: Vec::new(),
                info: Some(info),
            },
            NikValidationResult::Invalid(errors) => Self {
                valid: false,
                errors,
                info: None,
            },
        }
    }
}

/// Response DTO for birth date extraction
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BirthDateResponseDto {
    /// `null` when no calendar date could be decoded
    pub birth_date: Option<NaiveDate>,
}
