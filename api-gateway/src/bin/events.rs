//! Events API Lambda - CRUD operations for events.
//!
//! See [`shared::router`] for the endpoint table.

use std::sync::Arc;

use lambda_http::{run, service_fn, Error};
use shared::{db, router, Config, EventService, PgEventStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = Config::from_env()?;
    let database_url = shared::resolve_database_url(&config).await?;
    let pool = db::create_pool(&config, &database_url).await?;
    db::ensure_schema(&pool).await?;

    let service = Arc::new(EventService::new(Arc::new(PgEventStore::new(pool))));
    info!("Events API ready");

    run(service_fn(move |event| {
        let service = service.clone();
        async move { router::handle(&service, event).await }
    }))
    .await
}
