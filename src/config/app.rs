use anyhow::{bail, Result};
use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

impl StorageBackend {
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StorageBackend::Postgres),
            "memory" => Ok(StorageBackend::Memory),
            other => bail!("Unknown STORAGE_BACKEND '{}', expected 'postgres' or 'memory'", other),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub log_level: String,
    pub jwt_secret: String,
    pub storage_backend: StorageBackend,
    pub seed_catalog: bool,
    pub admin_email: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .unwrap_or(3000);
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let jwt_secret = env::var("JWT_SECRET")
            .unwrap_or_else(|_| "your-secret-key-change-in-production".to_string());
        let storage_backend =
            StorageBackend::parse(&env::var("STORAGE_BACKEND").unwrap_or_else(|_| "postgres".to_string()))?;
        let seed_catalog = env::var("SEED_CATALOG")
            .map(|value| matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(true);
        let admin_email = env::var("BEFIT_ADMIN_EMAIL").unwrap_or_else(|_| "admin@befit.com".to_string());

        if environment == "production" && jwt_secret == "your-secret-key-change-in-production" {
            bail!("JWT_SECRET must be set in production");
        }

        Ok(AppConfig {
            host,
            port,
            environment,
            log_level,
            jwt_secret,
            storage_backend,
            seed_catalog,
            admin_email,
        })
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Only a throwaway in-memory development server hands out an admin token.
    pub fn issues_dev_admin_token(&self) -> bool {
        self.is_development() && self.storage_backend == StorageBackend::Memory
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
