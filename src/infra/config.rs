//! Centralized configuration (environment variables + defaults).

use anyhow::Context;
use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8010;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(anyhow::anyhow!(
                "LOG_FORMAT must be `text` or `json`, got {other:?}"
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// `DATABASE_URL`; an in-memory SQLite database when unset.
    pub database_url: String,
    pub bind_addr: String,
    pub port: u16,
    pub max_connections: u32,
    /// `CLEAR_DB=true` drops the rides table before it is (re)created at startup.
    pub clear_db: bool,
    pub log_format: LogFormat,
    /// `LOG_FILE`; when set, logs are appended to this file instead of stdout.
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Reads the process environment, loading `.env` first when present.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let port = match lookup("PORT") {
            Some(v) => v
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got {v:?}"))?,
            None => DEFAULT_PORT,
        };
        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(v) => v
                .trim()
                .parse::<u32>()
                .with_context(|| format!("DB_MAX_CONNECTIONS must be a valid u32, got {v:?}"))?
                .max(1),
            None => DEFAULT_MAX_CONNECTIONS,
        };
        let clear_db = lookup("CLEAR_DB")
            .map(|v| v.trim().eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        let log_format = match lookup("LOG_FORMAT") {
            Some(v) => v.parse::<LogFormat>()?,
            None => LogFormat::default(),
        };
        let log_file = lookup("LOG_FILE")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            database_url,
            bind_addr,
            port,
            max_connections,
            clear_db,
            log_format,
            log_file,
        })
    }

    pub fn listen_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.bind_addr, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.bind_addr, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.port, 8010);
        assert_eq!(config.max_connections, 5);
        assert!(!config.clear_db);
        assert_eq!(config.log_format, LogFormat::Text);
        assert_eq!(config.log_file, None);
        assert_eq!(config.listen_addr().unwrap().to_string(), "0.0.0.0:8010");
    }

    #[test]
    fn values_are_read_from_the_environment() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite://rides.db"),
            ("BIND_ADDR", "127.0.0.1"),
            ("PORT", "3000"),
            ("DB_MAX_CONNECTIONS", "0"),
            ("CLEAR_DB", "TRUE"),
        ]))
        .unwrap();
        assert_eq!(config.database_url, "sqlite://rides.db");
        assert_eq!(config.listen_addr().unwrap().to_string(), "127.0.0.1:3000");
        assert_eq!(config.max_connections, 1);
        assert!(config.clear_db);
    }

    #[test]
    fn logging_settings_are_read() {
        let config = Config::from_lookup(lookup_from(&[
            ("LOG_FORMAT", "JSON"),
            ("LOG_FILE", "logs/app.log"),
        ]))
        .unwrap();
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.log_file, Some(PathBuf::from("logs/app.log")));

        let config = Config::from_lookup(lookup_from(&[("LOG_FILE", "  ")])).unwrap();
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn unknown_log_format_is_an_error() {
        let err = Config::from_lookup(lookup_from(&[("LOG_FORMAT", "xml")])).unwrap_err();
        assert!(err.to_string().contains("LOG_FORMAT"));
    }

    #[test]
    fn malformed_port_is_an_error() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
