use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use dotenvy::dotenv;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub feature_names_path: PathBuf,
    pub model_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            feature_names_path: env::var("FEATURE_NAMES_PATH")
                .unwrap_or_else(|_| "models/feature_names.json".to_string())
                .into(),
            model_path: env::var("MODEL_PATH")
                .unwrap_or_else(|_| "models/rf_model.json".to_string())
                .into(),
        })
    }

    /// Socket address to bind
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("HOST {:?} is not a valid IP address", self.host))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_addr() {
        let config = Config {
            host: "0.0.0.0".to_string(),
            port: 8080,
            feature_names_path: PathBuf::from("a.json"),
            model_path: PathBuf::from("b.json"),
        };
        assert_eq!(config.bind_addr().unwrap().port(), 8080);

        let bad = Config {
            host: "localhost".to_string(),
            ..config
        };
        assert!(bad.bind_addr().is_err());
    }
}
