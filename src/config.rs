/*
 * Responsibility
 * - 環境変数から設定を読み込む (DATABASE_URL, JWT_SECRET, timeout, CORS など)
 * - 設定値のバリデーション (不足なら起動失敗)
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()))
    }

    fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,

    pub database_url: String,
    pub database_max_connections: u32,

    pub cors_allowed_origins: Vec<String>,

    // token issuer と共有する HS256 の secret
    pub jwt_secret: String,
    pub token_leeway_seconds: u64,

    pub user_lookup_timeout: Duration,
    pub request_timeout: Duration,
    pub request_body_limit: usize,
}

// secret はログに出さない
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("addr", &self.addr)
            .field("app_env", &self.app_env)
            .field("database_max_connections", &self.database_max_connections)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field("token_leeway_seconds", &self.token_leeway_seconds)
            .field("user_lookup_timeout", &self.user_lookup_timeout)
            .field("request_timeout", &self.request_timeout)
            .field("request_body_limit", &self.request_body_limit)
            .finish_non_exhaustive()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port: u16 = match std::env::var("PORT") {
            Ok(s) => s.trim().parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            Err(_) => 5500,
        };

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::from_env();

        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;

        let database_max_connections = parse_or("DATABASE_MAX_CONNECTIONS", 5u32)?;

        let cors_allowed_origins =
            split_origins(&std::env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default());

        let jwt_secret =
            std::env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET"))?;
        if jwt_secret.is_empty() {
            return Err(ConfigError::Invalid("JWT_SECRET"));
        }

        let token_leeway_seconds = parse_or("TOKEN_LEEWAY_SECONDS", 0u64)?;

        let user_lookup_timeout =
            Duration::from_millis(parse_or("USER_LOOKUP_TIMEOUT_MS", 5_000u64)?);
        let request_timeout = Duration::from_secs(parse_or("REQUEST_TIMEOUT_SECONDS", 30u64)?);
        let request_body_limit = parse_or("REQUEST_BODY_LIMIT_BYTES", 1024 * 1024usize)?;

        Ok(Self {
            addr,
            app_env,
            database_url,
            database_max_connections,
            cors_allowed_origins,
            jwt_secret,
            token_leeway_seconds,
            user_lookup_timeout,
            request_timeout,
            request_body_limit,
        })
    }
}

// 未設定なら `default`、不正な値なら起動失敗
fn parse_or<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid(key)),
        Err(_) => Ok(default),
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_env_accepts_short_and_long_production_names() {
        assert_eq!(AppEnv::parse("production"), AppEnv::Production);
        assert_eq!(AppEnv::parse(" PROD "), AppEnv::Production);
        assert_eq!(AppEnv::parse("staging"), AppEnv::Development);
        assert!(!AppEnv::parse("").is_production());
    }

    #[test]
    fn split_origins_drops_blank_entries() {
        let origins = split_origins("https://a.example, ,https://b.example,");
        assert_eq!(origins, vec!["https://a.example", "https://b.example"]);
        assert!(split_origins("").is_empty());
    }

    #[test]
    fn config_error_names_the_key() {
        assert_eq!(
            ConfigError::Missing("JWT_SECRET").to_string(),
            "missing configuration: JWT_SECRET"
        );
        assert_eq!(
            ConfigError::Invalid("PORT").to_string(),
            "invalid configuration: PORT"
        );
    }
}
