#![allow(clippy::unwrap_used, clippy::expect_used, dead_code)]

//! Common test utilities for resources integration tests

use resources::infra::storage::migrations::Migrator;
use resources::{Resource, ResourcesConfig, ResourcesModule};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

/// Fresh in-memory `SQLite` database with the schema applied.
///
/// A single pooled connection keeps every query on the same in-memory database.
pub async fn inmem_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opts).await.expect("connect to in-memory sqlite");
    Migrator::up(&db, None).await.expect("apply migrations");
    db
}

pub async fn module() -> ResourcesModule {
    ResourcesModule::new(inmem_db().await, ResourcesConfig::default())
}

/// Resource created `age_secs` seconds before a fixed reference instant.
pub fn resource_aged(name: &str, description: Option<&str>, age_secs: i64) -> Resource {
    Resource {
        id: Uuid::now_v7(),
        name: name.to_owned(),
        description: description.map(str::to_owned),
        created_at: reference_instant() - Duration::seconds(age_secs),
    }
}

fn reference_instant() -> OffsetDateTime {
    time::macros::datetime!(2025-01-01 12:00:00 UTC)
}
