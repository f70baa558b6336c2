//! Indonesian administrative regions (wilayah) reference feature.
//!
//! Provinces and regencies/cities are served from an in-memory table built
//! once at startup (see [`reference`]). The NIK decoder resolves region names
//! through the same table.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/regions/provinces` | List all provinces |
//! | GET | `/api/regions/provinces/{code}` | Get province by code |
//! | GET | `/api/regions/provinces/{code}/cities` | List known cities in a province |
//! | GET | `/api/regions/provinces/{code}/cities/{city_code}` | Get city by code pair |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod reference;
pub mod routes;
pub mod services;

pub use services::RegionService;
