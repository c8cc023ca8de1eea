use serde::{Deserialize, Serialize};
use tracing::{info, error};

/// Application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Base URL of the item storage API
    #[serde(default = "default_api_server_url")]
    pub api_server_url: String,

    /// Surface underlying error details to the browser
    #[serde(default)]
    pub debug: bool,

    /// Timeout applied to every backend call
    #[serde(default = "default_backend_timeout_secs")]
    pub backend_timeout_secs: u64,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables or app.env file
    pub fn load() -> Result<Self, ConfigError> {
        // Try to load from app.env file first
        if std::path::Path::new("app.env").exists() {
            dotenvy::from_filename("app.env").ok();
        } else {
            // Fallback to .env file
            dotenvy::dotenv().ok();
        }

        match envy::from_env::<Config>() {
            Ok(config) => {
                info!("✅ Configuration loaded successfully");
                Ok(config)
            }
            Err(e) => {
                error!("❌ Failed to load configuration: {}", e);
                Err(ConfigError::EnvError(e))
            }
        }
    }

    /// Get the full server address
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The API base URL without a trailing slash
    pub fn api_base_url(&self) -> String {
        self.api_server_url.trim_end_matches('/').to_string()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            api_server_url: default_api_server_url(),
            debug: false,
            backend_timeout_secs: default_backend_timeout_secs(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    EnvError(envy::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::EnvError(e) => write!(f, "Environment variable error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_api_server_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_backend_timeout_secs() -> u64 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::default();
        assert_eq!(config.server_address(), "0.0.0.0:5000");
        assert_eq!(config.api_server_url, "http://localhost:3000");
        assert!(!config.debug);
        assert_eq!(config.backend_timeout_secs, 10);
    }

    #[test]
    fn api_base_url_strips_trailing_slash() {
        let config = Config {
            api_server_url: "http://api:3000/".to_string(),
            ..Config::default()
        };
        assert_eq!(config.api_base_url(), "http://api:3000");
    }

    #[test]
    fn envy_reads_fields_from_pairs() {
        let vars = vec![
            ("PORT".to_string(), "8080".to_string()),
            ("API_SERVER_URL".to_string(), "http://backend:3000".to_string()),
            ("DEBUG".to_string(), "true".to_string()),
        ];
        let config: Config = envy::from_iter(vars).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.api_server_url, "http://backend:3000");
        assert!(config.debug);
        assert_eq!(config.host, "0.0.0.0");
    }
}
