/*
 * Responsibility
 * - Load settings from the environment (.env is honoured via dotenvy)
 * - Validate them up front so a bad deployment fails at start-up
 * - Choose the post store backend and the seeding policy
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

use crate::services::seed::SeedPolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn from_env() -> Self {
        match std::env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
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

/// Which `PostStore` implementation backs the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    /// Volatile list with integer ids. Data is lost on restart.
    Memory,
    /// PostgreSQL table with uuid ids.
    Postgres {
        database_url: String,
        max_connections: u32,
    },
}

impl StoreBackend {
    pub fn name(&self) -> &'static str {
        match self {
            StoreBackend::Memory => "memory",
            StoreBackend::Postgres { .. } => "postgres",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,

    pub app_env: AppEnv,
    pub cors_allowed_origins: Vec<String>,

    pub store: StoreBackend,
    pub seed_policy: SeedPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(4000);

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::from_env();

        let cors_allowed_origins = std::env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        let store = match std::env::var("POST_STORE")
            .unwrap_or_else(|_| "memory".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "memory" => StoreBackend::Memory,
            "postgres" | "pg" => {
                let database_url = std::env::var("DATABASE_URL")
                    .map_err(|_| ConfigError::Missing("DATABASE_URL"))?;
                let max_connections = std::env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse::<u32>().ok())
                    .unwrap_or(5);
                StoreBackend::Postgres {
                    database_url,
                    max_connections,
                }
            }
            _ => return Err(ConfigError::Invalid("POST_STORE")),
        };

        let seed_policy = match std::env::var("SEED_POLICY") {
            Ok(v) => v
                .parse::<SeedPolicy>()
                .map_err(|_| ConfigError::Invalid("SEED_POLICY"))?,
            Err(_) => SeedPolicy::default(),
        };

        Ok(Self {
            addr,
            app_env,
            cors_allowed_origins,
            store,
            seed_policy,
        })
    }
}
