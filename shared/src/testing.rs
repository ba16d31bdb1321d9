//! Test doubles for the response sink and the persistence seam.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::http::ResponseSink;
use crate::models::{CreateEventDto, Event, UpdateEventDto};
use crate::response::HttpStatus;
use crate::store::EventStore;
use crate::{Error, Result};

/// Records every status and body written to it.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub statuses: Vec<u16>,
    pub bodies: Vec<serde_json::Value>,
}

impl ResponseSink for RecordingSink {
    fn set_status(&mut self, status: HttpStatus) -> &mut Self {
        self.statuses.push(status.code());
        self
    }

    fn write_json<B: Serialize + ?Sized>(&mut self, body: &B) -> &mut Self {
        self.bodies.push(serde_json::to_value(body).unwrap());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    Create(CreateEventDto),
    FindMany,
    FindUnique(String),
    Update(String, UpdateEventDto),
    Delete(String),
}

/// In-memory `EventStore` that records calls and can be told to reject.
#[derive(Default)]
pub struct FakeEventStore {
    events: Mutex<Vec<Event>>,
    calls: Mutex<Vec<StoreCall>>,
    failure: Mutex<Option<String>>,
}

impl FakeEventStore {
    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            events: Mutex::new(events),
            ..Self::default()
        }
    }

    /// Make every following call reject with a database error.
    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: StoreCall) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        match self.failure.lock().unwrap().as_ref() {
            Some(message) => Err(Error::Database(sqlx::Error::Protocol(message.clone()))),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl EventStore for FakeEventStore {
    async fn create(&self, data: CreateEventDto) -> Result<Event> {
        self.record(StoreCall::Create(data.clone()))?;
        let now = Utc::now();
        let event = Event {
            id: Uuid::new_v4(),
            name: data.name,
            date: data.date,
            created_at: now,
            updated_at: now,
        };
        self.events.lock().unwrap().push(event.clone());
        Ok(event)
    }

    async fn find_many(&self) -> Result<Vec<Event>> {
        self.record(StoreCall::FindMany)?;
        Ok(self.events.lock().unwrap().clone())
    }

    async fn find_unique(&self, id: &str) -> Result<Option<Event>> {
        self.record(StoreCall::FindUnique(id.to_string()))?;
        let events = self.events.lock().unwrap();
        Ok(events.iter().find(|e| e.id.to_string() == id).cloned())
    }

    async fn update(&self, id: &str, data: UpdateEventDto) -> Result<Option<Event>> {
        self.record(StoreCall::Update(id.to_string(), data.clone()))?;
        let mut events = self.events.lock().unwrap();
        let Some(event) = events.iter_mut().find(|e| e.id.to_string() == id) else {
            return Ok(None);
        };
        if let Some(name) = data.name {
            event.name = name;
        }
        if let Some(date) = data.date {
            event.date = date;
        }
        event.updated_at = Utc::now();
        Ok(Some(event.clone()))
    }

    async fn delete(&self, id: &str) -> Result<Option<Event>> {
        self.record(StoreCall::Delete(id.to_string()))?;
        let mut events = self.events.lock().unwrap();
        let position = events.iter().position(|e| e.id.to_string() == id);
        Ok(position.map(|i| events.remove(i)))
    }
}

/// Build a stored event with fixed timestamps.
pub fn sample_event(name: &str) -> Event {
    let at = "2025-05-04T12:00:00Z".parse().unwrap();
    Event {
        id: Uuid::new_v4(),
        name: name.to_string(),
        date: at,
        created_at: at,
        updated_at: at,
    }
}
