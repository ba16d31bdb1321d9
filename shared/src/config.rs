//! Configuration management for the Event API.

use std::env;

use crate::{Error, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Full connection URL; when set, the host and secret settings are not consulted
    pub database_url: Option<String>,
    /// Database host
    pub db_host: Option<String>,
    /// Database port
    pub db_port: u16,
    /// Database name
    pub db_name: String,
    /// ARN of the secret containing database credentials
    pub db_secret_arn: Option<String>,
    /// Pool size
    pub db_max_connections: u32,
    /// AWS region
    pub aws_region: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let database_url = lookup("DATABASE_URL").filter(|url| !url.is_empty());
        let db_host = lookup("DATABASE_HOST");
        let db_secret_arn = lookup("DATABASE_URL_SECRET_ARN");

        if database_url.is_none() {
            if db_host.is_none() {
                return Err(Error::Config("DATABASE_HOST not set".to_string()));
            }
            if db_secret_arn.is_none() {
                return Err(Error::Config("DATABASE_URL_SECRET_ARN not set".to_string()));
            }
        }

        Ok(Self {
            database_url,
            db_host,
            db_port: parse_or(&lookup, "DATABASE_PORT", 5432)?,
            db_name: lookup("DATABASE_NAME").unwrap_or_else(|| "events".to_string()),
            db_secret_arn,
            db_max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 5)?,
            aws_region: lookup("AWS_REGION").unwrap_or_else(|| "us-east-1".to_string()),
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T> {
    match lookup(key) {
        Some(raw) => raw
            .parse()
            .map_err(|_| Error::Config(format!("{key} is not a valid number: {raw}"))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_database_url_alone_is_enough() {
        let config = load(&[("DATABASE_URL", "postgres://localhost/events")]).unwrap();
        assert_eq!(config.database_url.as_deref(), Some("postgres://localhost/events"));
        assert_eq!(config.db_port, 5432);
        assert_eq!(config.db_name, "events");
        assert_eq!(config.db_max_connections, 5);
        assert_eq!(config.aws_region, "us-east-1");
    }

    #[test]
    fn test_secret_mode_requires_host_and_arn() {
        let err = load(&[("DATABASE_URL_SECRET_ARN", "arn:secret")]).unwrap_err();
        assert!(matches!(err, Error::Config(ref m) if m.contains("DATABASE_HOST")));

        let err = load(&[("DATABASE_HOST", "db.internal")]).unwrap_err();
        assert!(matches!(err, Error::Config(ref m) if m.contains("DATABASE_URL_SECRET_ARN")));

        let config = load(&[
            ("DATABASE_HOST", "db.internal"),
            ("DATABASE_URL_SECRET_ARN", "arn:secret"),
            ("DATABASE_PORT", "6543"),
        ])
        .unwrap();
        assert_eq!(config.db_port, 6543);
    }

    #[test]
    fn test_rejects_malformed_numbers() {
        let err = load(&[
            ("DATABASE_URL", "postgres://localhost/events"),
            ("DATABASE_MAX_CONNECTIONS", "many"),
        ])
        .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
