use utoipa::{Modify, OpenApi};

use crate::features::nik::{dtos as nik_dtos, handlers as nik_handlers, models as nik_models};
use crate::features::regions::{dtos as regions_dtos, handlers as regions_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // NIK
        nik_handlers::validate_nik,
        nik_handlers::extract_birth_date,
        // Regions
        regions_handlers::list_provinces,
        regions_handlers::get_province,
        regions_handlers::list_cities_by_province,
        regions_handlers::get_city,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // NIK
            nik_models::Gender,
            nik_models::NikInfo,
            nik_dtos::NikRequestDto,
            nik_dtos::NikValidationResponseDto,
            nik_dtos::BirthDateResponseDto,
            ApiResponse<nik_dtos::NikValidationResponseDto>,
            ApiResponse<nik_dtos::BirthDateResponseDto>,
            // Regions
            regions_dtos::ProvinceResponseDto,
            regions_dtos::CityResponseDto,
            ApiResponse<regions_dtos::ProvinceResponseDto>,
            ApiResponse<regions_dtos::CityResponseDto>,
        )
    ),
    tags(
        (name = "nik", description = "Indonesian identity number (NIK) validation"),
        (name = "regions", description = "Indonesian administrative regions (provinces, cities)"),
    ),
    info(
        title = "Federasi API",
        version = "0.1.0",
        description = "Identity number (NIK) and administrative region reference API",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_all_paths() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/nik/validate",
            "/api/nik/birth-date",
            "/api/regions/provinces",
            "/api/regions/provinces/{code}",
            "/api/regions/provinces/{code}/cities",
            "/api/regions/provinces/{code}/cities/{city_code}",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }

    #[test]
    fn test_swagger_info_modifier() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Custom".to_string(),
            version: "9.9.9".to_string(),
            description: "desc".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Custom");
        assert_eq!(doc.info.version, "9.9.9");
        assert_eq!(doc.info.description.as_deref(), Some("desc"));
    }
}
