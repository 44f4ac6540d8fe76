// src/config.rs
use std::net::IpAddr;

const DEFAULT_CORS_ORIGINS: &str = "http://localhost:5173,http://localhost:5174,http://localhost:5176";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub max_connections: u32,
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| "DATABASE_URL must be set".to_string())?;

        Ok(Self::from_parts(
            database_url,
            std::env::var("HOST").ok(),
            std::env::var("PORT").ok(),
            std::env::var("DB_MAX_CONNECTIONS").ok(),
            std::env::var("CORS_ORIGINS").ok(),
        ))
    }

    // Unparseable optional values fall back to their defaults.
    pub(crate) fn from_parts(
        database_url: String,
        host: Option<String>,
        port: Option<String>,
        max_connections: Option<String>,
        cors_origins: Option<String>,
    ) -> Self {
        let host = host
            .and_then(|h| h.parse::<IpAddr>().ok())
            .unwrap_or(IpAddr::from([127, 0, 0, 1]));
        let port = port.and_then(|p| p.parse::<u16>().ok()).unwrap_or(8000);
        let max_connections = max_connections
            .and_then(|m| m.parse::<u32>().ok())
            .filter(|m| *m > 0)
            .unwrap_or(10);
        let cors_origins = cors_origins
            .as_deref()
            .unwrap_or(DEFAULT_CORS_ORIGINS)
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .filter(|o| {
                // Credentialed CORS cannot answer with a wildcard origin.
                if o.contains('*') {
                    tracing::warn!(origin = %o, "Ignoring wildcard CORS origin");
                    return false;
                }
                true
            })
            .map(str::to_string)
            .collect();

        Self { database_url, host, port, max_connections, cors_origins }
    }
}
