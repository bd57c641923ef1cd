// src/common/config.rs
//! Server configuration loaded from environment variables

use std::env;
use tracing::warn;

const DEFAULT_DATABASE_URL: &str = "sqlite://biztime.db";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://localhost:5173";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub port: u16,
    pub reset_db: bool,
    pub max_connections: u32,
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            port: DEFAULT_PORT,
            reset_db: false,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            cors_origins: parse_origins(DEFAULT_CORS_ORIGINS),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables, keeping defaults for anything unset
    pub fn from_env() -> Self {
        let mut config = Self::default();

        // DATABASE_URL - sqlx connection string
        if let Ok(url) = env::var("DATABASE_URL") {
            if !url.trim().is_empty() {
                config.database_url = url;
            }
        }

        // PORT - listen port on 0.0.0.0
        if let Ok(port) = env::var("PORT") {
            match port.parse::<u16>() {
                Ok(val) => config.port = val,
                Err(_) => warn!(value = %port, "Invalid PORT, using default {}", DEFAULT_PORT),
            }
        }

        // RESET_DB - set to "true" to drop and recreate tables on startup
        if let Ok(reset) = env::var("RESET_DB") {
            config.reset_db = reset.to_lowercase() == "true";
        }

        // DB_MAX_CONNECTIONS - pool size
        if let Ok(max) = env::var("DB_MAX_CONNECTIONS") {
            match max.parse::<u32>() {
                Ok(val) if val > 0 => config.max_connections = val,
                _ => warn!(
                    value = %max,
                    "Invalid DB_MAX_CONNECTIONS, using default {}", DEFAULT_MAX_CONNECTIONS
                ),
            }
        }

        // CORS_ORIGINS - comma-separated list of allowed origins
        if let Ok(origins) = env::var("CORS_ORIGINS") {
            config.cors_origins = parse_origins(&origins);
        }

        config
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|origin| origin.trim().to_string())
        .filter(|origin| !origin.is_empty())
        .collect()
}
