//! Error types for the Event API.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while serving the Event API.
#[derive(Error, Debug)]
pub enum Error {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// AWS SDK error
    #[error("AWS error: {0}")]
    Aws(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request body could not be decoded
    #[error("Invalid request body: {0}")]
    InvalidBody(#[source] serde_json::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Not found error
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Discriminator used by the error handler to pick a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Database,
    Aws,
    Config,
    InvalidBody,
    Serialization,
    NotFound,
    Internal,
}

impl ErrorKind {
    /// Stable name reported to clients in the `error.name` field.
    pub fn name(self) -> &'static str {
        match self {
            ErrorKind::Database => "DatabaseError",
            ErrorKind::Aws => "AwsError",
            ErrorKind::Config => "ConfigError",
            ErrorKind::InvalidBody => "InvalidBodyError",
            ErrorKind::Serialization => "SerializationError",
            ErrorKind::NotFound => "NotFoundError",
            ErrorKind::Internal => "InternalError",
        }
    }
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Database(_) => ErrorKind::Database,
            Error::Aws(_) => ErrorKind::Aws,
            Error::Config(_) => ErrorKind::Config,
            Error::InvalidBody(_) => ErrorKind::InvalidBody,
            Error::Serialization(_) => ErrorKind::Serialization,
            Error::NotFound(_) => ErrorKind::NotFound,
            Error::Internal(_) => ErrorKind::Internal,
        }
    }
}

/// Errors travel inside response envelopes as `{"name": .., "message": ..}`.
impl Serialize for Error {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Error", 2)?;
        state.serialize_field("name", self.kind().name())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}
