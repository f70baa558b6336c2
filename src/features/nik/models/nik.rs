use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Gender encoded in the NIK birth-day field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Fields decoded from a valid NIK
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NikInfo {
    /// Province name, or "Kode XX" when the code has no name entry
    #[schema(example = "Jawa Barat")]
    pub province: String,
    /// City name, or "Kode XX.YY" when the city is not in the reference table
    #[schema(example = "Kota Bandung")]
    pub city: String,
    /// Always "Kecamatan ZZ"; there is no district table
    #[schema(example = "Kecamatan 01")]
    pub district: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
}

/// Outcome of validating a NIK.
///
/// `Invalid` always carries at least one message, in check order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NikValidationResult {
    Valid(NikInfo),
    Invalid(Vec<String>),
}

impl NikValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, NikValidationResult::Valid(_))
    }

    pub fn info(&self) -> Option<&NikInfo> {
        match self {
            NikValidationResult::Valid(info) => Some(info),
            NikValidationResult::Invalid(_) => None,
        }
    }

    pub fn errors(&self) -> &[String] {
        match self {
            NikValidationResult::Valid(_) => &[],
            NikValidationResult::Invalid(errors) => errors,
        }
    }
}
