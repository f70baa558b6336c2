use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_request_body_size: usize,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    /// Read configuration from the process environment.
    /// `.env` is loaded once in `main` before this runs.
    pub fn from_env() -> Result<Self, String> {
        Ok(Config {
            app: AppConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

impl AppConfig {
    // NIK payloads are tiny; anything bigger than this is rejected before parsing
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 64 * 1024;

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = parse_port(&env::var("PORT").unwrap_or_else(|_| "3000".to_string()))?;

        let cors_allowed_origins = parse_origins(
            &env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string()),
        );

        let max_request_body_size = parse_body_size(
            &env::var("MAX_REQUEST_BODY_SIZE")
                .unwrap_or_else(|_| Self::DEFAULT_MAX_REQUEST_BODY_SIZE.to_string()),
        )?;

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            max_request_body_size,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Federasi API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION").unwrap_or_else(|_| {
            "Identity number (NIK) and administrative region reference API".to_string()
        });

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

/// Tokio worker thread count from `TOKIO_WORKER_THREADS`, defaulting to
/// the available parallelism when unset
pub fn worker_threads_from_env() -> Result<usize, String> {
    match env::var("TOKIO_WORKER_THREADS") {
        Ok(raw) => parse_worker_threads(&raw),
        Err(_) => Ok(std::thread::available_parallelism()
            .map(|p| p.get())
            .unwrap_or(4)),
    }
}

fn parse_worker_threads(raw: &str) -> Result<usize, String> {
    match raw.trim().parse::<usize>() {
        Ok(threads) if threads > 0 => Ok(threads),
        _ => Err("TOKIO_WORKER_THREADS must be a positive integer".to_string()),
    }
}

fn parse_port(raw: &str) -> Result<u16, String> {
    raw.trim()
        .parse::<u16>()
        .map_err(|e| format!("Invalid PORT: {}", e))
}

fn parse_body_size(raw: &str) -> Result<usize, String> {
    raw.trim()
        .parse::<usize>()
        .map_err(|_| "MAX_REQUEST_BODY_SIZE must be a valid number".to_string())
}

/// Parse CORS allowed origins from a comma-separated string
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins() {
        assert_eq!(
            parse_origins("http://a.test, http://b.test ,,"),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
        assert_eq!(parse_origins("*"), vec!["*".to_string()]);
        assert!(parse_origins(" , ").is_empty());
    }

    #[test]
    fn test_parse_worker_threads() {
        assert_eq!(parse_worker_threads("4"), Ok(4));
        assert_eq!(parse_worker_threads(" 8 "), Ok(8));
        assert_eq!(
            parse_worker_threads("0"),
            Err("TOKIO_WORKER_THREADS must be a positive integer".to_string())
        );
        assert_eq!(
            parse_worker_threads("abc"),
            Err("TOKIO_WORKER_THREADS must be a positive integer".to_string())
        );
        assert!(parse_worker_threads("-2").is_err());
        assert!(parse_worker_threads("").is_err());
    }

    #[test]
    fn test_parse_port() {
        assert_eq!(parse_port("3000"), Ok(3000));
        assert!(parse_port("abc").unwrap_err().starts_with("Invalid PORT"));
        assert!(parse_port("70000").unwrap_err().starts_with("Invalid PORT"));
    }

    #[test]
    fn test_parse_body_size() {
        assert_eq!(parse_body_size("65536"), Ok(65536));
        assert_eq!(
            parse_body_size("64KB"),
            Err("MAX_REQUEST_BODY_SIZE must be a valid number".to_string())
        );
        assert!(parse_body_size("-1").is_err());
    }

    #[test]
    fn test_swagger_credentials() {
        let mut swagger = SwaggerConfig {
            username: Some("admin".to_string()),
            password: None,
            title: "t".to_string(),
            version: "v".to_string(),
            description: "d".to_string(),
        };
        assert_eq!(swagger.credentials(), None);

        swagger.password = Some("secret".to_string());
        assert_eq!(swagger.credentials(), Some("admin:secret".to_string()));
    }

    #[test]
    fn test_server_address() {
        let app = AppConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
            cors_allowed_origins: vec![],
            max_request_body_size: 1024,
        };
        assert_eq!(app.server_address(), "0.0.0.0:8080");
    }
}
