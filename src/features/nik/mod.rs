//! NIK (Nomor Induk Kependudukan) validation feature.
//!
//! Decodes the 16-digit Indonesian identity number into region, birth date
//! and gender. Used by registration forms to check the identity field and
//! pre-fill the birth date.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/nik/validate` | Validate and decode a NIK |
//! | POST | `/api/nik/birth-date` | Best-effort birth date extraction |

pub mod decoder;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::NikService;
