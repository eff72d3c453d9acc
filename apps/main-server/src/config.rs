//! Server configuration.

use std::env;
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 54872;

/// Where records are stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    /// Records live in memory only.
    Memory,
    /// Records live in the SQLite database at this URL.
    Sqlite(String),
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Database URL; unset means in-memory storage.
    pub database_url: Option<String>,
    /// File holding the persisted session identity.
    pub session_file: PathBuf,
    /// Log level.
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());
        if let Some(url) = &database_url {
            if !url.starts_with("sqlite:") {
                anyhow::bail!("Unsupported DATABASE_URL scheme: {url} (expected sqlite:)");
            }
        }

        let session_file = lookup("STUDYDESK_SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(default_session_file);

        Ok(Self {
            host: lookup("STUDYDESK_SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("STUDYDESK_SERVER_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            database_url,
            session_file,
            log_level: lookup("STUDYDESK_LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        })
    }

    /// Returns the server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the configured store backend.
    pub fn store_backend(&self) -> anyhow::Result<StoreBackend> {
        match &self.database_url {
            None => Ok(StoreBackend::Memory),
            Some(url) if url.starts_with("sqlite:") => Ok(StoreBackend::Sqlite(url.clone())),
            Some(url) => anyhow::bail!("Unsupported DATABASE_URL scheme: {url}"),
        }
    }
}

fn default_session_file() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".studydesk")
        .join("session.json")
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.server_addr(), "0.0.0.0:54872");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.store_backend().unwrap(), StoreBackend::Memory);
        assert!(config.session_file.ends_with(".studydesk/session.json"));
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("STUDYDESK_SERVER_HOST", "127.0.0.1"),
            ("STUDYDESK_SERVER_PORT", "8080"),
            ("DATABASE_URL", "sqlite:studydesk.db"),
            ("STUDYDESK_SESSION_FILE", "/tmp/session.json"),
            ("STUDYDESK_LOG_LEVEL", "debug"),
        ])
        .unwrap();

        assert_eq!(config.server_addr(), "127.0.0.1:8080");
        assert_eq!(
            config.store_backend().unwrap(),
            StoreBackend::Sqlite("sqlite:studydesk.db".to_string())
        );
        assert_eq!(config.session_file, PathBuf::from("/tmp/session.json"));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_invalid_port_falls_back() {
        let config = config_from(&[("STUDYDESK_SERVER_PORT", "not-a-port")]).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn test_unsupported_database_url() {
        assert!(config_from(&[("DATABASE_URL", "postgres://localhost/db")]).is_err());
    }
}
