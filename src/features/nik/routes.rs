use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::nik::handlers;
use crate::features::nik::services::NikService;

/// Create routes for the NIK feature
pub fn routes(service: Arc<NikService>) -> Router {
    Router::new()
        .route("/api/nik/validate", post(handlers::validate_nik))
        .route("/api/nik/birth-date", post(handlers::extract_birth_date))
        .with_state(service)
}
