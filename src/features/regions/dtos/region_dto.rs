use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::regions::models::{City, Province};

/// Query parameters for searching regions
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct RegionSearchQuery {
    /// Search by name (case-insensitive, partial match) or code prefix
    #[param(example = "bandung")]
    pub search: Option<String>,
}

/// Response DTO for province data
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProvinceResponseDto {
    #[schema(example = "32")]
    pub code: String,
    #[schema(example = "Jawa Barat")]
    pub name: String,
}

impl From<Province> for ProvinceResponseDto {
    fn from(province: Province) -> Self {
        Self {
            code: province.code.to_string(),
            name: province.name.to_string(),
        }
    }
}

/// Response DTO for city (kabupaten/kota) data
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CityResponseDto {
    #[schema(example = "73")]
    pub code: String,
    /// Province-qualified code (format: XX.XX)
    #[schema(example = "32.73")]
    pub full_code: String,
    #[schema(example = "Kota Bandung")]
    pub name: String,
    #[schema(example = "32")]
    pub province_code: String,
}

impl From<City> for CityResponseDto {
    fn from(city: City) -> Self {
        Self {
            full_code: city.full_code(),
            code: city.code.to_string(),
            name: city.name.to_string(),
            province_code: city.province_code.to_string(),
        }
    }
}
