/// Server configuration loaded from environment variables.
///
/// All fields except the token secret have sensible defaults suitable for
/// local development. In production, override via environment variables.
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
    /// Session token configuration (signing secret, lifetime).
    pub auth: AuthConfig,
}

/// Configuration for session token issuance and verification.
///
/// The secret is injected into the gate through this struct rather than read
/// from the environment at verification time, so tests can run against
/// fixture secrets. Only [`AuthConfig::from_env`] touches the process
/// environment.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HMAC-SHA256 secret used to sign and verify session tokens.
    pub token_secret: String,
    /// Session token lifetime in minutes (default: 60).
    pub token_ttl_mins: i64,
}

/// Default session token lifetime in minutes.
const DEFAULT_TOKEN_TTL_MINS: i64 = 60;

impl AuthConfig {
    /// Load token configuration from environment variables.
    ///
    /// | Env Var               | Required | Default |
    /// |-----------------------|----------|---------|
    /// | `AUTH_TOKEN_SECRET`   | **yes**  | --      |
    /// | `AUTH_TOKEN_TTL_MINS` | no       | `60`    |
    ///
    /// # Panics
    ///
    /// Panics if `AUTH_TOKEN_SECRET` is not set or is empty. A verifier
    /// without a secret cannot make a single correct decision, so this is a
    /// startup-time fatal condition.
    pub fn from_env() -> Self {
        let token_secret = std::env::var("AUTH_TOKEN_SECRET")
            .expect("AUTH_TOKEN_SECRET must be set in the environment");
        assert!(!token_secret.is_empty(), "AUTH_TOKEN_SECRET must not be empty");

        let token_ttl_mins: i64 = std::env::var("AUTH_TOKEN_TTL_MINS")
            .unwrap_or_else(|_| DEFAULT_TOKEN_TTL_MINS.to_string())
            .parse()
            .expect("AUTH_TOKEN_TTL_MINS must be a valid i64");

        Self {
            token_secret,
            token_ttl_mins,
        }
    }
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

        let auth = AuthConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            auth,
        }
    }
}
