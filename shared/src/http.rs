//! HTTP helpers for Lambda functions.

use lambda_http::{Body, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::error;

use crate::response::{HttpStatus, MessageEnvelope};
use crate::{Error, Result};

/// Outbound response target written by the envelope builder.
///
/// Both methods return the sink so calls can be chained.
pub trait ResponseSink {
    fn set_status(&mut self, status: HttpStatus) -> &mut Self;
    fn write_json<B: Serialize + ?Sized>(&mut self, body: &B) -> &mut Self;
}

/// Sink backed by a `lambda_http` response.
#[derive(Debug)]
pub struct LambdaSink {
    status: HttpStatus,
    body: Option<String>,
    headers: Vec<(&'static str, String)>,
}

impl Default for LambdaSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LambdaSink {
    pub fn new() -> Self {
        Self {
            status: HttpStatus::Ok,
            body: None,
            headers: vec![("Access-Control-Allow-Origin", "*".to_string())],
        }
    }

    pub fn header(&mut self, name: &'static str, value: impl Into<String>) -> &mut Self {
        self.headers.push((name, value.into()));
        self
    }

    pub fn status(&self) -> HttpStatus {
        self.status
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Build the Lambda response from whatever was written.
    pub fn into_response(self) -> std::result::Result<Response<Body>, lambda_http::Error> {
        let mut builder = Response::builder().status(self.status.code());
        for (name, value) in &self.headers {
            builder = builder.header(*name, value);
        }
        let body = match self.body {
            Some(json) => {
                builder = builder.header("Content-Type", "application/json");
                Body::from(json)
            }
            None => Body::Empty,
        };
        Ok(builder.body(body)?)
    }
}

impl ResponseSink for LambdaSink {
    fn set_status(&mut self, status: HttpStatus) -> &mut Self {
        self.status = status;
        self
    }

    fn write_json<B: Serialize + ?Sized>(&mut self, body: &B) -> &mut Self {
        match serde_json::to_string(body) {
            Ok(json) => self.body = Some(json),
            Err(e) => {
                error!(error = %e, "Failed to serialize response body");
                let status = HttpStatus::InternalServerError;
                let fallback = MessageEnvelope::new(status, "Internal server error");
                self.status = status;
                self.body = serde_json::to_string(&fallback).ok();
            }
        }
        self
    }
}

/// Parse request body as JSON.
pub fn parse_json_body<T: DeserializeOwned>(body: &Body) -> Result<T> {
    serde_json::from_slice(body.as_ref()).map_err(Error::InvalidBody)
}
