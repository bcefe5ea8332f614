//! Server configuration

use std::net::SocketAddr;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Minimum length of the session signing key outside development
const MIN_SECRET_LEN: usize = 32;

/// 服务器配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | DATABASE_URL | sqlite:database/mopas.db | SQLite 数据库 |
/// | HTTP_HOST | 0.0.0.0 | 监听地址 |
/// | HTTP_PORT | 5000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | SECRET_KEY | (dev placeholder) | 会话签名密钥 |
/// | SESSION_TTL_MINUTES | 1440 | 会话有效期 (分钟) |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | - | 日志文件目录 (可选) |
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite connection URL
    pub database_url: String,
    /// Bind address
    pub http_host: String,
    /// HTTP port
    pub http_port: u16,
    /// Environment: development | staging | production
    pub environment: String,
    /// Key used to sign session cookies
    pub secret_key: String,
    /// Session lifetime in minutes
    pub session_ttl_minutes: i64,
    /// Default log level
    pub log_level: String,
    /// Optional directory for rolling log files
    pub log_dir: Option<String>,
}

impl Config {
    /// Require a secret env var: must be set, non-empty and long enough in
    /// non-development environments.
    fn require_secret(
        name: &str,
        value: Option<String>,
        environment: &str,
    ) -> Result<String, BoxError> {
        let val = match value {
            Some(v) => v,
            None => {
                if environment != "development" {
                    return Err(format!("{name} must be set in {environment} environment").into());
                }
                format!("dev-{name}-not-for-production")
            }
        };
        if environment != "development" && val.len() < MIN_SECRET_LEN {
            return Err(format!(
                "{name} must be at least {MIN_SECRET_LEN} characters in {environment} environment"
            )
            .into());
        }
        Ok(val)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BoxError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("ENVIRONMENT").unwrap_or_else(|| "development".into());

        Ok(Self {
            database_url: lookup("DATABASE_URL")
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "sqlite:database/mopas.db".into()),
            http_host: lookup("HTTP_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            http_port: lookup("HTTP_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            secret_key: Self::require_secret(
                "SECRET_KEY",
                lookup("SECRET_KEY").filter(|s| !s.is_empty()),
                &environment,
            )?,
            session_ttl_minutes: lookup("SESSION_TTL_MINUTES")
                .and_then(|p| p.parse().ok())
                .filter(|m: &i64| *m > 0)
                .unwrap_or(1440),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: lookup("LOG_DIR").filter(|s| !s.is_empty()),
            environment,
        })
    }

    /// Configuration for tests: in-memory database, fixed secret
    pub fn for_tests() -> Self {
        Self {
            database_url: "sqlite::memory:".into(),
            http_host: "127.0.0.1".into(),
            http_port: 0,
            environment: "test".into(),
            secret_key: "test-secret-key-with-at-least-32-chars".into(),
            session_ttl_minutes: 60,
            log_level: "debug".into(),
            log_dir: None,
        }
    }

    /// Socket address to bind
    pub fn bind_addr(&self) -> Result<SocketAddr, BoxError> {
        Ok(format!("{}:{}", self.http_host, self.http_port).parse()?)
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}
