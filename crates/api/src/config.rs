/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Category names to ensure at startup, from comma-separated `SEED_CATEGORIES`.
    pub seed_categories: Vec<String>,
}

/// Local front-end dev servers allowed by default.
pub const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://localhost:5173";

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                       |
    /// |------------------------|-----------------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                                     |
    /// | `PORT`                 | `8080`                                        |
    /// | `CORS_ORIGINS`         | `http://localhost:3000,http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                          |
    /// | `SEED_CATEGORIES`      | (empty)                                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = split_list(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let seed_categories = split_list(&std::env::var("SEED_CATEGORIES").unwrap_or_default());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            seed_categories,
        }
    }
}

/// Split a comma-separated env value, trimming entries and dropping empties.
fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
