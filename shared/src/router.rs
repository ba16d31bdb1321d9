//! Event routes.
//!
//! Endpoints (under the `/app/event` mount point):
//! - POST /events - Create an event
//! - GET /events - List events
//! - GET /events/{eventId} - Get a single event
//! - PUT /events/{eventId} - Update an event
//! - DELETE /events/{eventId} - Delete an event

use lambda_http::{Body, Request, Response};
use tracing::info;

use crate::controller;
use crate::error_handler::handle_error;
use crate::http::LambdaSink;
use crate::response;
use crate::service::EventService;

pub const MOUNT_POINT: &str = "/app/event";

const ALLOWED_METHODS: &str = "GET,HEAD,PUT,PATCH,POST,DELETE";

#[derive(Debug, PartialEq, Eq)]
enum Route<'a> {
    Events,
    Event(&'a str),
    Unmatched,
}

fn route(path: &str) -> Route<'_> {
    let Some(rest) = path.strip_prefix(MOUNT_POINT) else {
        return Route::Unmatched;
    };
    let rest = rest.trim_end_matches('/');
    match rest.strip_prefix("/events") {
        Some("") => Route::Events,
        Some(tail) => match tail.strip_prefix('/') {
            Some(id) if !id.is_empty() && !id.contains('/') => Route::Event(id),
            _ => Route::Unmatched,
        },
        None => Route::Unmatched,
    }
}

/// Serve one request. Controller errors are answered by [`handle_error`].
pub async fn handle(
    service: &EventService,
    event: Request,
) -> Result<Response<Body>, lambda_http::Error> {
    let method = event.method().as_str();
    let raw_path = event.uri().path();
    // Strip /api stage prefix if present (API Gateway REST API includes stage in path)
    let path = raw_path.strip_prefix("/api").unwrap_or(raw_path);

    info!("Events request: {} {}", method, path);

    let mut res = LambdaSink::new();

    if method == "OPTIONS" {
        let requested = event
            .headers()
            .get("access-control-request-headers")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("Content-Type")
            .to_string();
        res.header("Access-Control-Allow-Methods", ALLOWED_METHODS)
            .header("Access-Control-Allow-Headers", requested);
        response::no_content(&mut res);
        return res.into_response();
    }

    let outcome = match (method, route(path)) {
        ("POST", Route::Events) => {
            controller::create_event(service, event.body(), &mut res).await
        }
        ("GET", Route::Events) => controller::get_all_events(service, &mut res).await,
        ("GET", Route::Event(id)) => {
            controller::get_event_by_id(service, id, &mut res).await
        }
        ("PUT", Route::Event(id)) => {
            controller::update_event(service, id, event.body(), &mut res).await
        }
        ("DELETE", Route::Event(id)) => {
            controller::delete_event(service, id, &mut res).await
        }
        _ => {
            response::not_found(&mut res, "Route not found");
            Ok(())
        }
    };

    if let Err(err) = outcome {
        handle_error(&mut res, &err);
    }

    res.into_response()
}
