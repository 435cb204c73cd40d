/**
 * Server Configuration
 *
 * This module loads and validates server configuration from environment
 * variables and creates the PostgreSQL connection pool.
 *
 * # Required Configuration
 *
 * `DATABASE_URL` and `JWT_SECRET` are required; startup fails with a
 * `ConfigError` if either is missing. There is deliberately no fallback
 * signing secret.
 *
 * # Optional Configuration
 *
 * The AI analysis settings (`OPENAI_API_KEY`, `OPENAI_BASE_URL`,
 * `OPENAI_MODEL`) are optional. Without an API key the analyze endpoint
 * reports an internal error; everything else works.
 *
 * # Connection Pooling
 *
 * The pool is explicitly bounded (max connections, acquire timeout).
 * Startup retries a small, fixed number of times on a well-defined
 * transient error class (an IO failure or a pool acquire timeout) and
 * never on anything else.
 */
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;
use thiserror::Error;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    MissingVar(&'static str),
}

/// Settings for the AI analysis client
#[derive(Debug, Clone)]
pub struct AiConfig {
    /// Base URL of an OpenAI-compatible API
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

/// Application configuration loaded once at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    /// JWT signing secret; required, no fallback
    pub jwt_secret: String,
    /// Mark session cookies `Secure` (set when APP_ENV=production)
    pub secure_cookies: bool,
    /// AI analysis settings, absent when no API key is configured
    pub ai: Option<AiConfig>,
}

impl AppConfig {
    /// Load configuration from the environment.
    ///
    /// # Errors
    /// `ConfigError::MissingVar` when `DATABASE_URL` or `JWT_SECRET` is
    /// absent or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = require_var("DATABASE_URL")?;
        let jwt_secret = require_var("JWT_SECRET")?;

        let secure_cookies = std::env::var("APP_ENV")
            .map(|env| env == "production")
            .unwrap_or(false);

        let ai = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .map(|api_key| AiConfig {
                base_url: std::env::var("OPENAI_BASE_URL")
                    .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
                api_key,
                model: std::env::var("OPENAI_MODEL")
                    .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            });

        if ai.is_none() {
            tracing::warn!("OPENAI_API_KEY not set; the analyze endpoint will be unavailable");
        }

        Ok(AppConfig {
            database_url,
            jwt_secret,
            secure_cookies,
            ai,
        })
    }
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::MissingVar(name))
}

/// Maximum pool connections
const MAX_CONNECTIONS: u32 = 10;

/// Startup connection attempts before giving up
const MAX_CONNECT_ATTEMPTS: u32 = 3;

/// Create the connection pool and run migrations.
///
/// Retries on transient failures only, with a short pause between
/// attempts; a definitive error (bad credentials, unknown database) is
/// returned immediately.
pub async fn connect_database(database_url: &str) -> Result<PgPool, sqlx::Error> {
    let mut attempt = 1;

    let pool = loop {
        tracing::info!("connecting to database (attempt {attempt}/{MAX_CONNECT_ATTEMPTS})");

        match PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .acquire_timeout(Duration::from_secs(30))
            .connect(database_url)
            .await
        {
            Ok(pool) => break pool,
            Err(e) if attempt < MAX_CONNECT_ATTEMPTS && is_transient(&e) => {
                tracing::warn!("transient database connection failure: {e}");
                tokio::time::sleep(Duration::from_secs(2)).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    };

    tracing::info!("database connection pool created");

    tracing::info!("running database migrations");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("database migrations completed");

    Ok(pool)
}

/// The transient error class worth retrying at startup.
fn is_transient(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Io(_) | sqlx::Error::PoolTimedOut)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn set_required_vars() {
        std::env::set_var("DATABASE_URL", "postgres://localhost/reqmarket");
        std::env::set_var("JWT_SECRET", "test-secret");
    }

    fn clear_all_vars() {
        for name in [
            "DATABASE_URL",
            "JWT_SECRET",
            "APP_ENV",
            "OPENAI_API_KEY",
            "OPENAI_BASE_URL",
            "OPENAI_MODEL",
        ] {
            std::env::remove_var(name);
        }
    }

    #[test]
    #[serial]
    fn test_missing_jwt_secret_fails() {
        clear_all_vars();
        std::env::set_var("DATABASE_URL", "postgres://localhost/reqmarket");

        let err = AppConfig::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("JWT_SECRET")));
    }

    #[test]
    #[serial]
    fn test_missing_database_url_fails() {
        clear_all_vars();
        std::env::set_var("JWT_SECRET", "test-secret");

        let err = AppConfig::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("DATABASE_URL")));
    }

    #[test]
    #[serial]
    fn test_minimal_configuration() {
        clear_all_vars();
        set_required_vars();

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.jwt_secret, "test-secret");
        assert!(!config.secure_cookies);
        assert!(config.ai.is_none());
    }

    #[test]
    #[serial]
    fn test_ai_configuration_defaults() {
        clear_all_vars();
        set_required_vars();
        std::env::set_var("OPENAI_API_KEY", "sk-test");

        let config = AppConfig::from_env().unwrap();
        let ai = config.ai.unwrap();
        assert_eq!(ai.base_url, "https://api.openai.com/v1");
        assert_eq!(ai.model, "gpt-4o-mini");
    }

    #[test]
    #[serial]
    fn test_production_enables_secure_cookies() {
        clear_all_vars();
        set_required_vars();
        std::env::set_var("APP_ENV", "production");

        let config = AppConfig::from_env().unwrap();
        assert!(config.secure_cookies);
    }

    #[test]
    fn test_transient_error_class() {
        assert!(is_transient(&sqlx::Error::PoolTimedOut));
        assert!(is_transient(&sqlx::Error::Io(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "refused"
        ))));
        assert!(!is_transient(&sqlx::Error::RowNotFound));
    }
}
