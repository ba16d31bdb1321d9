//! Shared library for the Event API Lambda.
//!
//! Request flow: [`router`] matches the route and builds one response sink,
//! [`controller`] calls [`service`], which calls the [`store`]. Responses are
//! shaped by [`response`]; errors returned by a controller are shaped by
//! [`error_handler`].

pub mod config;
pub mod controller;
pub mod db;
pub mod error;
pub mod error_handler;
pub mod http;
pub mod models;
pub mod response;
pub mod router;
pub mod secrets;
pub mod service;
pub mod store;

#[cfg(test)]
mod testing;

pub use config::Config;
pub use error::{Error, ErrorKind, Result};
pub use http::{LambdaSink, ResponseSink};
pub use models::{CreateEventDto, Event, UpdateEventDto};
pub use response::HttpStatus;
pub use secrets::{resolve_database_url, DatabaseCredentials};
pub use service::EventService;
pub use store::{EventStore, PgEventStore};
