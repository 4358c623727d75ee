//! Process settings from environment variables (after `.env` is loaded by the binary).

use crate::error::ConfigError;
use crate::sql::Table;
use std::net::SocketAddr;

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

#[derive(Clone, Debug)]
pub struct Settings {
    pub database_url: String,
    pub listen_addr: SocketAddr,
    pub max_connections: u32,
    pub table: Table,
    pub body_limit: usize,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup. `DATABASE_URL` is the only required key.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let listen_addr = parse_or("LISTEN_ADDR", get("LISTEN_ADDR"), DEFAULT_LISTEN_ADDR.parse().ok())?;
        let max_connections = parse_or("DATABASE_MAX_CONNECTIONS", get("DATABASE_MAX_CONNECTIONS"), Some(DEFAULT_MAX_CONNECTIONS))?;
        let body_limit = parse_or("REQUEST_BODY_LIMIT", get("REQUEST_BODY_LIMIT"), Some(DEFAULT_BODY_LIMIT))?;

        let defaults = Table::default();
        let table = Table {
            schema: identifier("DATABASE_SCHEMA", get("DATABASE_SCHEMA").unwrap_or(defaults.schema))?,
            name: identifier("DEVELOPERS_TABLE", get("DEVELOPERS_TABLE").unwrap_or(defaults.name))?,
        };

        Ok(Settings {
            database_url,
            listen_addr,
            max_connections,
            table,
            body_limit,
        })
    }
}

fn parse_or<T: std::str::FromStr>(name: &'static str, raw: Option<String>, default: Option<T>) -> Result<T, ConfigError> {
    match raw {
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid { name, value }),
        None => default.ok_or(ConfigError::Missing(name)),
    }
}

/// Plain SQL identifier: letter or underscore, then letters, digits, underscores.
fn identifier(name: &'static str, value: String) -> Result<String, ConfigError> {
    let mut chars = value.chars();
    let valid = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(value)
    } else {
        Err(ConfigError::Invalid { name, value })
    }
}
