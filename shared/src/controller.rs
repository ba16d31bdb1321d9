//! Event controller: one handler per CRUD operation.
//!
//! Handlers write their own success and not-found responses. Every other
//! failure is returned to the caller, which hands it to
//! [`handle_error`](crate::error_handler::handle_error).

use lambda_http::Body;

use crate::http::{parse_json_body, ResponseSink};
use crate::models::{CreateEventDto, UpdateEventDto};
use crate::response;
use crate::service::EventService;
use crate::Result;

pub const EVENT_NOT_FOUND: &str = "Event not found";

pub async fn create_event<R: ResponseSink>(
    service: &EventService,
    body: &Body,
    res: &mut R,
) -> Result<()> {
    let input: CreateEventDto = parse_json_body(body)?;
    let event = service.create(input).await?;
    response::created(res, &event);
    Ok(())
}

pub async fn get_all_events<R: ResponseSink>(service: &EventService, res: &mut R) -> Result<()> {
    let events = service.get_all().await?;
    response::ok(res, &events);
    Ok(())
}

pub async fn get_event_by_id<R: ResponseSink>(
    service: &EventService,
    id: &str,
    res: &mut R,
) -> Result<()> {
    match service.get_by_id(id).await? {
        Some(event) => response::ok(res, &event),
        None => response::not_found(res, EVENT_NOT_FOUND),
    };
    Ok(())
}

pub async fn update_event<R: ResponseSink>(
    service: &EventService,
    id: &str,
    body: &Body,
    res: &mut R,
) -> Result<()> {
    let input: UpdateEventDto = parse_json_body(body)?;
    match service.update(id, input).await? {
        Some(event) => response::ok(res, &event),
        None => response::not_found(res, EVENT_NOT_FOUND),
    };
    Ok(())
}

pub async fn delete_event<R: ResponseSink>(
    service: &EventService,
    id: &str,
    res: &mut R,
) -> Result<()> {
    match service.delete(id).await? {
        Some(_) => response::no_content(res),
        None => response::not_found(res, EVENT_NOT_FOUND),
    };
    Ok(())
}
