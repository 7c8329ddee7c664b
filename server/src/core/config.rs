//! Server configuration

/// Service configuration - every setting comes from the environment.
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HTTP_PORT | 8080 | HTTP listen port |
/// | DB_PATH | restaurant.db | SQLite database file |
/// | AUTH_SERVER_URL | http://localhost:3001 | role-provider endpoint |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | LOG_LEVEL | info | tracing filter when RUST_LOG is unset |
/// | LOG_DIR | (unset) | directory for rotating file logs; console only when unset |
///
/// # Example
///
/// ```ignore
/// DB_PATH=/data/restaurant.db HTTP_PORT=9090 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API listen port
    pub http_port: u16,
    /// SQLite database file path
    pub db_path: String,
    /// Role-provider endpoint (external identity collaborator)
    pub auth_server_url: String,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Default log level
    pub log_level: String,
    /// Optional directory for rotating file logs
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            db_path: std::env::var("DB_PATH").unwrap_or_else(|_| "restaurant.db".into()),
            auth_server_url: std::env::var("AUTH_SERVER_URL")
                .unwrap_or_else(|_| "http://localhost:3001".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
