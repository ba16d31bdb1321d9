//! Event service: forwards each operation to the persistence client.

use std::sync::Arc;

use crate::models::{CreateEventDto, Event, UpdateEventDto};
use crate::store::EventStore;
use crate::Result;

#[derive(Clone)]
pub struct EventService {
    store: Arc<dyn EventStore>,
}

impl EventService {
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, body: CreateEventDto) -> Result<Event> {
        self.store.create(body).await
    }

    pub async fn get_all(&self) -> Result<Vec<Event>> {
        self.store.find_many().await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Event>> {
        self.store.find_unique(id).await
    }

    pub async fn update(&self, id: &str, body: UpdateEventDto) -> Result<Option<Event>> {
        self.store.update(id, body).await
    }

    pub async fn delete(&self, id: &str) -> Result<Option<Event>> {
        self.store.delete(id).await
    }
}
