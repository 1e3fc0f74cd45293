#![cfg(test)]

use std::sync::Arc;

use rstest::fixture;

use crate::infra::argon2_password_hasher;
use crate::infra::clock::SystemClock;
use crate::infra::config::{AppConfig, ApplicationConfig, DatabaseConfig, LoggerConfig, SessionConfig, SpaConfig};
use crate::infra::db::init_db;
use crate::infra::state::AppState;

/// DB-backed tests are driven by TEST_DATABASE_URL; tests check the variable
/// themselves and skip when it is not set.
pub fn test_database_url() -> Option<String> {
    std::env::var("TEST_DATABASE_URL").ok()
}

#[fixture]
pub fn test_config() -> AppConfig {
    AppConfig {
        db: DatabaseConfig {
            url: test_database_url().unwrap_or_else(|| "postgres://localhost/medialib_test".to_string()),
            max_connections: 5,
        },
        logger: LoggerConfig {
            log_path: "./test.log".to_string(),
        },
        application: ApplicationConfig {
            allow_origins: vec!["*".to_string()],
            address: std::env::var("TEST_APP_ADDRESS").unwrap_or_else(|_| "127.0.0.1:3000".to_string()),
        },
        session: SessionConfig {
            idle_timeout_minutes: 30,
            cookie_name: std::env::var("TEST_COOKIE_NAME").unwrap_or_else(|_| "session_id".to_string()),
            cookie_max_age: 1_209_600,
            cookie_secure: false,
            cookie_http_only: true,
        },
        spa: SpaConfig {
            dist_dir: "./frontend/dist".to_string(),
            index_file: "index.html".to_string(),
        },
    }
}

#[fixture]
pub async fn init_test_app_state(test_config: AppConfig) -> anyhow::Result<AppState> {
    let pool = init_db(&test_config).await?;
    let password_hasher = argon2_password_hasher();

    Ok(AppState {
        pool,
        hasher: Arc::new(password_hasher),
        config: Arc::new(test_config.clone()),
        clock: Arc::new(SystemClock),
    })
}
