use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::core::error::Result;
use crate::features::regions::dtos::{CityResponseDto, ProvinceResponseDto, RegionSearchQuery};
use crate::features::regions::services::RegionService;
use crate::shared::types::{ApiResponse, Meta};

// ==================== Province Handlers ====================

/// List all provinces
#[utoipa::path(
    get,
    path = "/api/regions/provinces",
    params(RegionSearchQuery),
    responses(
        (status = 200, description = "List of provinces", body = ApiResponse<Vec<ProvinceResponseDto>>)
    ),
    tag = "regions"
)]
pub async fn list_provinces(
    State(service): State<Arc<RegionService>>,
    Query(query): Query<RegionSearchQuery>,
) -> Result<Json<ApiResponse<Vec<ProvinceResponseDto>>>> {
    let provinces = service.list_provinces(query.search.as_deref());
    let dtos: Vec<ProvinceResponseDto> = provinces.into_iter().map(Into::into).collect();
    let meta = Meta::total(dtos.len());
    Ok(Json(ApiResponse::success(Some(dtos), None, Some(meta))))
}

/// Get a province by code
#[utoipa::path(
    get,
    path = "/api/regions/provinces/{code}",
    params(
        ("code" = String, Path, description = "Province code (2 digits)")
    ),
    responses(
        (status = 200, description = "Province details", body = ApiResponse<ProvinceResponseDto>),
        (status = 404, description = "Province not found")
    ),
    tag = "regions"
)]
pub async fn get_province(
    State(service): State<Arc<RegionService>>,
    Path(code): Path<String>,
) -> Result<Json<ApiResponse<ProvinceResponseDto>>> {
    let province = service.get_province_by_code(&code)?;
    Ok(Json(ApiResponse::success(
        Some(province.into()),
        None,
        None,
    )))
}

// ==================== City Handlers ====================

/// List known cities in a province
#[utoipa::path(
    get,
    path = "/api/regions/provinces/{code}/cities",
    params(
        ("code" = String, Path, description = "Province code (2 digits)"),
        RegionSearchQuery
    ),
    responses(
        (status = 200, description = "List of cities in the province", body = ApiResponse<Vec<CityResponseDto>>),
        (status = 404, description = "Province not found")
    ),
    tag = "regions"
)]
pub async fn list_cities_by_province(
    State(service): State<Arc<RegionService>>,
    Path(code): Path<String>,
    Query(query): Query<RegionSearchQuery>,
) -> Result<Json<ApiResponse<Vec<CityResponseDto>>>> {
    let cities = service.list_cities_by_province(&code, query.search.as_deref())?;
    let dtos: Vec<CityResponseDto> = cities.into_iter().map(Into::into).collect();
    let meta = Meta::total(dtos.len());
    Ok(Json(ApiResponse::success(Some(dtos), None, Some(meta))))
}

/// Get a city by province code and city code
#[utoipa::path(
    get,
    path = "/api/regions/provinces/{code}/cities/{city_code}",
    params(
        ("code" = String, Path, description = "Province code (2 digits)"),
        ("city_code" = String, Path, description = "City code within the province (2 digits)")
    ),
    responses(
        (status = 200, description = "City details", body = ApiResponse<CityResponseDto>),
        (status = 404, description = "Province or city not found")
    ),
    tag = "regions"
)]
pub async fn get_city(
    State(service): State<Arc<RegionService>>,
    Path((code, city_code)): Path<(String, String)>,
) -> Result<Json<ApiResponse<CityResponseDto>>> {
    let city = service.get_city(&code, &city_code)?;
    Ok(Json(ApiResponse::success(Some(city.into()), None, None)))
}
