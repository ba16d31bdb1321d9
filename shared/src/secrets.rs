//! Database URL resolution, optionally through AWS Secrets Manager.

use aws_sdk_secretsmanager::Client as SecretsClient;
use serde::Deserialize;
use tokio::sync::OnceCell;
use tracing::info;

use crate::{Config, Error, Result};

/// Credentials are fetched once per process.
static CREDENTIALS: OnceCell<DatabaseCredentials> = OnceCell::const_new();

/// Database credentials from Secrets Manager.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseCredentials {
    pub username: String,
    pub password: String,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub dbname: Option<String>,
}

impl DatabaseCredentials {
    /// Postgres URL, preferring values in the secret over the configured ones.
    pub fn connection_url(&self, config: &Config) -> String {
        let host = self
            .host
            .as_deref()
            .or(config.db_host.as_deref())
            .unwrap_or("localhost");
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username,
            self.password,
            host,
            self.port.unwrap_or(config.db_port),
            self.dbname.as_deref().unwrap_or(&config.db_name),
        )
    }
}

/// Resolve the URL the pool should connect to.
pub async fn resolve_database_url(config: &Config) -> Result<String> {
    if let Some(url) = &config.database_url {
        return Ok(url.clone());
    }

    let secret_arn = config
        .db_secret_arn
        .as_deref()
        .ok_or_else(|| Error::Config("DATABASE_URL_SECRET_ARN not set".to_string()))?;

    let credentials = CREDENTIALS
        .get_or_try_init(|| fetch_credentials(config, secret_arn))
        .await?;

    Ok(credentials.connection_url(config))
}

async fn fetch_credentials(config: &Config, secret_arn: &str) -> Result<DatabaseCredentials> {
    info!(region = %config.aws_region, "Fetching database credentials");

    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.aws_region.clone()))
        .load()
        .await;
    let client = SecretsClient::new(&aws_config);

    let response = client
        .get_secret_value()
        .secret_id(secret_arn)
        .send()
        .await
        .map_err(|e| Error::Aws(format!("Failed to get secret: {}", e)))?;

    let secret_string = response
        .secret_string()
        .ok_or_else(|| Error::Aws("Secret has no string value".to_string()))?;

    parse_credentials(secret_string)
}

fn parse_credentials(secret: &str) -> Result<DatabaseCredentials> {
    serde_json::from_str(secret)
        .map_err(|e| Error::Aws(format!("Failed to parse database credentials: {}", e)))
}
