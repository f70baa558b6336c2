mod core;
mod features;
mod shared;

use crate::core::config::{worker_threads_from_env, Config};
use crate::core::middleware;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::features::nik::{routes as nik_routes, NikService};
use crate::features::regions::{routes as regions_routes, RegionService};
use axum::extract::DefaultBodyLimit;
use axum::{middleware::from_fn, Router};
use std::sync::Arc;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

fn main() -> anyhow::Result<()> {
    // Load .env file BEFORE anything reads the environment (RUST_LOG, TOKIO_WORKER_THREADS)
    let _ = dotenvy::dotenv();

    // Build Tokio runtime with configurable worker threads
    let worker_threads = worker_threads_from_env().map_err(|e| anyhow::anyhow!(e))?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    tracing::info!(
        "System info: tokio_worker_threads={}, pid={}",
        worker_threads,
        std::process::id()
    );
    tracing::info!("Configuration loaded successfully");

    let region_service = Arc::new(RegionService::new());
    tracing::info!(
        "Region reference table loaded: {} provinces",
        region_service.list_provinces(None).len()
    );

    let nik_service = Arc::new(NikService::new());
    tracing::info!("NIK service initialized");

    let app = build_router(&config, region_service, nik_service);

    let addr = config.app.server_address();
    let listener = bind_listener(&addr)?;
    tracing::info!("Server listening on {}", format!("http://{}", addr));
    tracing::info!(
        "Swagger UI available at {}",
        format!("http://{}/swagger-ui/", addr)
    );

    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(
    config: &Config,
    region_service: Arc<RegionService>,
    nik_service: Arc<NikService>,
) -> Router {
    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let swagger = if let Some(credentials) = config.swagger.credentials() {
        tracing::info!("Swagger UI basic auth enabled");
        Router::new()
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
            .layer(from_fn(middleware::basic_auth_middleware(Arc::new(
                credentials,
            ))))
    } else {
        tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
    };

    async fn health_check() -> axum::http::StatusCode {
        axum::http::StatusCode::OK
    }
    let health_route = Router::new().route("/health", axum::routing::get(health_check));

    let api_routes = Router::new()
        .merge(nik_routes::routes(nik_service))
        .merge(regions_routes::routes(region_service));

    Router::new()
        .merge(swagger)
        .merge(api_routes)
        .merge(health_route)
        .layer(DefaultBodyLimit::max(config.app.max_request_body_size))
        .layer(middleware::cors_layer(
            config.app.cors_allowed_origins.clone(),
        ))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
}

fn bind_listener(addr: &str) -> anyhow::Result<tokio::net::TcpListener> {
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    // Use socket2 for TCP listener configuration
    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    socket.set_nodelay(true)?;

    let keepalive = socket2::TcpKeepalive::new().with_time(std::time::Duration::from_secs(60));
    socket.set_tcp_keepalive(&keepalive)?;

    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;

    Ok(tokio::net::TcpListener::from_std(socket.into())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{AppConfig, SwaggerConfig};
    use axum::http::{HeaderName, HeaderValue, StatusCode};
    use axum_test::TestServer;
    use base64::prelude::*;

    fn config(username: Option<&str>, password: Option<&str>) -> Config {
        Config {
            app: AppConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors_allowed_origins: vec!["*".to_string()],
                max_request_body_size: 1024,
            },
            swagger: SwaggerConfig {
                username: username.map(str::to_string),
                password: password.map(str::to_string),
                title: "Test".to_string(),
                version: "0.0.0".to_string(),
                description: "test".to_string(),
            },
        }
    }

    fn server(config: &Config) -> TestServer {
        let app = build_router(
            config,
            Arc::new(RegionService::new()),
            Arc::new(NikService::new()),
        );
        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn test_health_and_request_id() {
        let server = server(&config(None, None));

        let response = server.get("/health").await;
        response.assert_status_ok();
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn test_openapi_served_with_configured_title() {
        let server = server(&config(None, None));

        let response = server.get("/api-docs/openapi.json").await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["info"]["title"], "Test");
    }

    #[tokio::test]
    async fn test_swagger_basic_auth() {
        let server = server(&config(Some("admin"), Some("secret")));

        server
            .get("/api-docs/openapi.json")
            .await
            .assert_status(StatusCode::UNAUTHORIZED);

        let header = format!("Basic {}", BASE64_STANDARD.encode("admin:secret"));
        server
            .get("/api-docs/openapi.json")
            .add_header(
                HeaderName::from_static("authorization"),
                HeaderValue::from_str(&header).unwrap(),
            )
            .await
            .assert_status_ok();

        // API routes stay open
        server
            .get("/api/regions/provinces/32")
            .await
            .assert_status_ok();
    }

    #[tokio::test]
    async fn test_body_limit() {
        let server = server(&config(None, None));

        let response = server
            .post("/api/nik/validate")
            .content_type("application/json")
            .bytes(format!("{{\"nik\":\"{}\"}}", "1".repeat(2048)).into())
            .await;
        response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
    }
}
