use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::regions::handlers;
use crate::features::regions::services::RegionService;

/// Create routes for the regions feature
pub fn routes(service: Arc<RegionService>) -> Router {
    Router::new()
        .route("/api/regions/provinces", get(handlers::list_provinces))
        .route("/api/regions/provinces/{code}", get(handlers::get_province))
        .route(
            "/api/regions/provinces/{code}/cities",
            get(handlers::list_cities_by_province),
        )
        .route(
            "/api/regions/provinces/{code}/cities/{city_code}",
            get(handlers::get_city),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::Value;

    fn server() -> TestServer {
        TestServer::new(routes(Arc::new(RegionService::new()))).unwrap()
    }

    #[tokio::test]
    async fn test_list_provinces() {
        let response = server().get("/api/regions/provinces").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["meta"]["total"], 38);
        assert_eq!(body["data"][0]["code"], "11");
        assert_eq!(body["data"][0]["name"], "Aceh");
    }

    #[tokio::test]
    async fn test_list_provinces_with_search() {
        let response = server()
            .get("/api/regions/provinces")
            .add_query_param("search", "papua")
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["meta"]["total"], 6);
    }

    #[tokio::test]
    async fn test_get_province_not_found() {
        let response = server().get("/api/regions/provinces/99").await;
        response.assert_status(StatusCode::NOT_FOUND);

        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Province with code '99' not found");
    }

    #[tokio::test]
    async fn test_get_city_is_scoped_to_province() {
        let server = server();

        let response = server.get("/api/regions/provinces/32/cities/73").await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["name"], "Kota Bandung");
        assert_eq!(body["data"]["fullCode"], "32.73");
        assert_eq!(body["data"]["provinceCode"], "32");

        let response = server.get("/api/regions/provinces/33/cities/73").await;
        let body: Value = response.json();
        assert_eq!(body["data"]["name"], "Kota Salatiga");

        server
            .get("/api/regions/provinces/32/cities/78")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_cities_by_province() {
        let response = server().get("/api/regions/provinces/31/cities").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["meta"]["total"], 6);
        assert_eq!(body["data"][0]["name"], "Kabupaten Administrasi Kepulauan Seribu");
    }
}
