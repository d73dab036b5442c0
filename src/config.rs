use std::env;
use anyhow::{Context, Result};

// Hardcoded credentials - this fixture deliberately keeps secrets as source
// literals so scanners have something to flag. They must never appear in a
// response body.
pub const DEFAULT_API_KEY: &str = "sk-1234567890abcdef";
pub const DEFAULT_DB_PASSWORD: &str = "admin123";

#[derive(Debug, Clone)]
pub struct Config {
    pub service_port: u16,
    pub service_host: String,
    pub api_key: String,
    pub db_password: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        let api_key = env::var("API_KEY")
            .unwrap_or_else(|_| DEFAULT_API_KEY.to_string());

        let db_password = env::var("DB_PASSWORD")
            .unwrap_or_else(|_| DEFAULT_DB_PASSWORD.to_string());

        Ok(Config {
            service_port,
            service_host,
            api_key,
            db_password,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
        tracing::info!("  API key source: {}",
            if self.api_key == DEFAULT_API_KEY { "built-in default" } else { "environment" });
        tracing::info!("  DB password source: {}",
            if self.db_password == DEFAULT_DB_PASSWORD { "built-in default" } else { "environment" });
    }
}
