//! Process configuration, read once at startup and passed into the router.
//!
//! Handlers never read the environment themselves.

use std::time::Duration;

use axum::http::HeaderValue;
use thiserror::Error;
use url::Url;

use networksync_observability::LogFormat;

pub const ENV_DATABASE_URL: &str = "SUPABASE_URL";
pub const ENV_DATABASE_KEY: &str = "SUPABASE_ANON_KEY";
pub const ENV_HOST: &str = "NETWORKSYNC_HOST";
pub const ENV_PORT: &str = "NETWORKSYNC_PORT";
pub const ENV_IDENTITY: &str = "NETWORKSYNC_IDENTITY";
pub const ENV_JWT_SECRET: &str = "NETWORKSYNC_JWT_SECRET";
pub const ENV_CORS_ORIGINS: &str = "NETWORKSYNC_CORS_ORIGINS";
pub const ENV_PROBE_TIMEOUT: &str = "NETWORKSYNC_PROBE_TIMEOUT_SECS";
pub const ENV_LOG_FORMAT: &str = "NETWORKSYNC_LOG_FORMAT";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8001;
const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("NETWORKSYNC_PORT must be a port number, got '{0}'")]
    InvalidPort(String),

    #[error("NETWORKSYNC_PROBE_TIMEOUT_SECS must be a positive number of seconds, got '{0}'")]
    InvalidProbeTimeout(String),

    #[error("NETWORKSYNC_IDENTITY must be 'static' or 'jwt', got '{0}'")]
    UnknownIdentityMode(String),

    #[error("NETWORKSYNC_JWT_SECRET is required when NETWORKSYNC_IDENTITY=jwt")]
    MissingJwtSecret,

    #[error("SUPABASE_URL is not a usable http(s) base URL: {0}")]
    InvalidDatabaseUrl(String),

    #[error("invalid CORS origin '{0}'")]
    InvalidCorsOrigin(String),

    #[error(transparent)]
    LogFormat(#[from] networksync_observability::UnknownLogFormat),
}

/// Top-level application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    /// `None` when either downstream credential is missing or unusable.
    pub database: Option<DatabaseConfig>,
    /// Why supplied database credentials were set aside, if they were.
    pub database_rejected: Option<ConfigError>,
    pub identity: IdentityMode,
    pub cors: CorsConfig,
    pub probe_timeout: Duration,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Hosted database/auth service coordinates.
#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: Url,
    /// REST root probed by the connectivity check (`{url}/rest/v1/`).
    pub rest_url: Url,
    pub api_key: String,
}

impl DatabaseConfig {
    pub fn new(raw_url: &str, api_key: impl Into<String>) -> Result<Self, ConfigError> {
        let normalized = format!("{}/", raw_url.trim().trim_end_matches('/'));
        let url = Url::parse(&normalized)
            .map_err(|e| ConfigError::InvalidDatabaseUrl(format!("{raw_url}: {e}")))?;

        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(ConfigError::InvalidDatabaseUrl(raw_url.to_string()));
        }

        let rest_url = url
            .join("rest/v1/")
            .map_err(|e| ConfigError::InvalidDatabaseUrl(format!("{raw_url}: {e}")))?;

        Ok(Self {
            url,
            rest_url,
            api_key: api_key.into(),
        })
    }
}

impl core::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.url.as_str())
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Which identity resolver guards the protected routes.
#[derive(Clone, PartialEq, Eq, Default)]
pub enum IdentityMode {
    /// Every bearer credential resolves to the development identity.
    #[default]
    Static,
    /// HS256 tokens verified with a shared secret.
    Jwt { secret: String },
}

impl core::fmt::Debug for IdentityMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Static => f.write_str("Static"),
            Self::Jwt { .. } => f.write_str("Jwt { secret: <redacted> }"),
        }
    }
}

/// Cross-origin policy.
///
/// An empty origin list means "echo whatever origin asked".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<HeaderValue>,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut server = ServerConfig::default();
        if let Some(host) = get(ENV_HOST) {
            server.host = host;
        }
        if let Some(port) = get(ENV_PORT) {
            server.port = port.parse().map_err(|_| ConfigError::InvalidPort(port))?;
        }

        // A bad database URL does not stop startup; the database health check reports it.
        let (database, database_rejected) = match (get(ENV_DATABASE_URL), get(ENV_DATABASE_KEY)) {
            (Some(url), Some(key)) => match DatabaseConfig::new(&url, key) {
                Ok(db) => (Some(db), None),
                Err(e) => (None, Some(e)),
            },
            _ => (None, None),
        };

        let identity = match get(ENV_IDENTITY).map(|m| m.to_lowercase()).as_deref() {
            None | Some("static") => IdentityMode::Static,
            Some("jwt") => IdentityMode::Jwt {
                secret: get(ENV_JWT_SECRET).ok_or(ConfigError::MissingJwtSecret)?,
            },
            Some(other) => return Err(ConfigError::UnknownIdentityMode(other.to_string())),
        };

        let cors = CorsConfig {
            allowed_origins: match get(ENV_CORS_ORIGINS) {
                Some(raw) => parse_origins(&raw)?,
                None => Vec::new(),
            },
        };

        let probe_timeout = match get(ENV_PROBE_TIMEOUT) {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidProbeTimeout(raw)),
            },
            None => Duration::from_secs(DEFAULT_PROBE_TIMEOUT_SECS),
        };

        let log_format = match get(ENV_LOG_FORMAT) {
            Some(raw) => raw.parse()?,
            None => LogFormat::default(),
        };

        Ok(Self {
            server,
            database,
            database_rejected,
            identity,
            cors,
            probe_timeout,
            log_format,
        })
    }

    /// Log what was resolved; call after tracing is initialised.
    pub fn log_startup_summary(&self) {
        match (&self.database, &self.database_rejected) {
            (Some(db), _) => tracing::info!(url = %db.url, "database connectivity probe configured"),
            (None, Some(e)) => tracing::warn!(
                error = %e,
                "database configuration ignored; /api/health/database will report unavailable"
            ),
            (None, None) => tracing::warn!(
                "database credentials not found ({ENV_DATABASE_URL} / {ENV_DATABASE_KEY}); \
                 /api/health/database will report unavailable"
            ),
        }

        match self.identity {
            IdentityMode::Static => {
                tracing::warn!("static identity resolver active; bearer tokens are not verified")
            }
            IdentityMode::Jwt { .. } => tracing::info!("HS256 identity resolver active"),
        }

        tracing::info!(
            addr = %self.server.bind_addr(),
            cors_origins = self.cors.allowed_origins.len(),
            probe_timeout_secs = self.probe_timeout.as_secs(),
            "configuration loaded"
        );
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            database: None,
            database_rejected: None,
            identity: IdentityMode::default(),
            cors: CorsConfig::default(),
            probe_timeout: Duration::from_secs(DEFAULT_PROBE_TIMEOUT_SECS),
            log_format: LogFormat::default(),
        }
    }
}

fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(|o| HeaderValue::from_str(o).map_err(|_| ConfigError::InvalidCorsOrigin(o.to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.server, ServerConfig::default());
        assert_eq!(cfg.server.bind_addr(), "0.0.0.0:8001");
        assert!(cfg.database.is_none());
        assert_eq!(cfg.identity, IdentityMode::Static);
        assert!(cfg.cors.allowed_origins.is_empty());
        assert_eq!(cfg.probe_timeout, Duration::from_secs(5));
        assert_eq!(cfg.log_format, LogFormat::Json);
    }

    #[test]
    fn database_requires_both_variables() {
        let only_url = config(&[(ENV_DATABASE_URL, "https://db.example.com")]).unwrap();
        assert!(only_url.database.is_none());

        let blank_key = config(&[
            (ENV_DATABASE_URL, "https://db.example.com"),
            (ENV_DATABASE_KEY, "   "),
        ])
        .unwrap();
        assert!(blank_key.database.is_none());
    }

    #[test]
    fn database_rest_url_is_derived_from_base() {
        for base in ["https://db.example.com", "https://db.example.com/"] {
            let cfg = config(&[(ENV_DATABASE_URL, base), (ENV_DATABASE_KEY, "anon")]).unwrap();
            let db = cfg.database.unwrap();
            assert_eq!(db.rest_url.as_str(), "https://db.example.com/rest/v1/");
            assert_eq!(db.api_key, "anon");
        }

        let nested = DatabaseConfig::new("http://localhost:9000/proxy", "k").unwrap();
        assert_eq!(nested.rest_url.as_str(), "http://localhost:9000/proxy/rest/v1/");
    }

    #[test]
    fn unusable_database_url_is_set_aside_not_fatal() {
        for raw in ["ftp://db", "not a url"] {
            let cfg = config(&[(ENV_DATABASE_URL, raw), (ENV_DATABASE_KEY, "k")]).unwrap();
            assert!(cfg.database.is_none(), "{raw} should not configure a database");
            assert!(matches!(
                cfg.database_rejected,
                Some(ConfigError::InvalidDatabaseUrl(_))
            ));
        }
    }

    #[test]
    fn valid_database_url_is_not_rejected() {
        let cfg = config(&[(ENV_DATABASE_URL, "https://db.example"), (ENV_DATABASE_KEY, "k")]).unwrap();
        assert!(cfg.database.is_some());
        assert!(cfg.database_rejected.is_none());
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let cfg = config(&[
            (ENV_DATABASE_URL, "https://db.example.com"),
            (ENV_DATABASE_KEY, "super-secret-key"),
            (ENV_IDENTITY, "jwt"),
            (ENV_JWT_SECRET, "jwt-secret-value"),
        ])
        .unwrap();
        let rendered = format!("{cfg:?}");
        assert!(!rendered.contains("super-secret-key"));
        assert!(!rendered.contains("jwt-secret-value"));
    }

    #[test]
    fn jwt_mode_requires_secret() {
        assert_eq!(
            config(&[(ENV_IDENTITY, "jwt")]).unwrap_err(),
            ConfigError::MissingJwtSecret
        );

        let cfg = config(&[(ENV_IDENTITY, "JWT"), (ENV_JWT_SECRET, "s3cret")]).unwrap();
        assert_eq!(cfg.identity, IdentityMode::Jwt { secret: "s3cret".to_string() });
    }

    #[test]
    fn unknown_identity_mode_is_rejected() {
        assert_eq!(
            config(&[(ENV_IDENTITY, "oauth")]).unwrap_err(),
            ConfigError::UnknownIdentityMode("oauth".to_string())
        );
    }

    #[test]
    fn port_and_timeout_are_validated() {
        assert_eq!(
            config(&[(ENV_PORT, "eighty")]).unwrap_err(),
            ConfigError::InvalidPort("eighty".to_string())
        );
        assert_eq!(
            config(&[(ENV_PROBE_TIMEOUT, "0")]).unwrap_err(),
            ConfigError::InvalidProbeTimeout("0".to_string())
        );

        let cfg = config(&[(ENV_PORT, "9000"), (ENV_PROBE_TIMEOUT, "2")]).unwrap();
        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.probe_timeout, Duration::from_secs(2));
    }

    #[test]
    fn cors_origins_are_split_and_trimmed() {
        let cfg = config(&[(
            ENV_CORS_ORIGINS,
            "http://localhost:3000, https://app.example.com,,",
        )])
        .unwrap();
        assert_eq!(
            cfg.cors.allowed_origins,
            vec![
                HeaderValue::from_static("http://localhost:3000"),
                HeaderValue::from_static("https://app.example.com"),
            ]
        );
    }

    #[test]
    fn log_format_is_parsed() {
        let cfg = config(&[(ENV_LOG_FORMAT, "pretty")]).unwrap();
        assert_eq!(cfg.log_format, LogFormat::Pretty);
        assert!(matches!(
            config(&[(ENV_LOG_FORMAT, "xml")]).unwrap_err(),
            ConfigError::LogFormat(_)
        ));
    }
}
