/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Deployment environment name (`development` or `production`).
    pub environment: String,
    /// Static admin credentials and session token.
    pub admin: AdminConfig,
}

/// The admin credential pair and session token, all optional.
///
/// When any value is unset, login always fails and the access gate never
/// matches a cookie; the admin surface is effectively disabled.
#[derive(Debug, Clone, Default)]
pub struct AdminConfig {
    pub email: Option<String>,
    pub password: Option<String>,
    pub session_token: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `APP_ENV`              | `development`              |
    /// | `ADMIN_EMAIL`          | unset                      |
    /// | `ADMIN_PASSWORD`       | unset                      |
    /// | `ADMIN_TOKEN`          | unset                      |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let environment = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            environment,
            admin: AdminConfig::from_env(),
        }
    }

    /// Whether the server runs in a production configuration. Drives the
    /// `Secure` flag on the session cookie.
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl AdminConfig {
    /// Read the admin secrets from `ADMIN_EMAIL`, `ADMIN_PASSWORD`, and
    /// `ADMIN_TOKEN`. Unset variables stay `None`.
    pub fn from_env() -> Self {
        Self {
            email: std::env::var("ADMIN_EMAIL").ok(),
            password: std::env::var("ADMIN_PASSWORD").ok(),
            session_token: std::env::var("ADMIN_TOKEN").ok(),
        }
    }

    /// The token value the access gate compares the session cookie
    /// against. Unset configuration yields an empty string, which an
    /// absent cookie never equals.
    pub fn expected_token(&self) -> &str {
        self.session_token.as_deref().unwrap_or_default()
    }
}
