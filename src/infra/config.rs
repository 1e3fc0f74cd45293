use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggerConfig {
    pub log_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    pub allow_origins: Vec<String>,
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Sessions idle for longer than this are deleted on the next request.
    pub idle_timeout_minutes: i64,
    pub cookie_name: String,
    pub cookie_max_age: i64,
    pub cookie_secure: bool,
    pub cookie_http_only: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpaConfig {
    pub dist_dir: String,
    pub index_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub db: DatabaseConfig,
    pub logger: LoggerConfig,
    pub application: ApplicationConfig,
    pub session: SessionConfig,
    pub spa: SpaConfig,
}

impl AppConfig {
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<AppConfig> {
        let contents = std::fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use crate::infra::config::AppConfig;

    #[test]
    fn test_parse_full_config() {
        let raw = r#"
            [db]
            url = "postgres://localhost/medialib"
            max_connections = 5

            [logger]
            log_path = "./logs"

            [application]
            allow_origins = ["*"]
            address = "127.0.0.1:8000"

            [session]
            idle_timeout_minutes = 30
            cookie_name = "session_id"
            cookie_max_age = 1209600
            cookie_secure = true
            cookie_http_only = true

            [spa]
            dist_dir = "./frontend/dist"
            index_file = "index.html"
        "#;
        let config: AppConfig = toml::from_str(raw).expect("config should parse");
        assert_eq!(config.session.idle_timeout_minutes, 30);
        assert_eq!(config.session.cookie_name, "session_id");
        assert_eq!(config.spa.index_file, "index.html");
    }
}
