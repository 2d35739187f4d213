//! Module wiring for resources.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use resources_sdk::ResourcesClientV1;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::info;

use crate::config::ResourcesConfig;
use crate::domain::health::HealthService;
use crate::domain::local_client::LocalClient;
use crate::domain::service::Service;
use crate::infra::storage::SeaOrmResourcesRepository;
use crate::infra::storage::migrations::Migrator;

/// Resources module.
///
/// Owns the domain service and health check built over an injected database
/// handle, and exposes them as a REST router and an in-process client.
#[derive(Clone)]
pub struct ResourcesModule {
    db: DatabaseConnection,
    config: ResourcesConfig,
    service: Arc<Service>,
    health: Arc<HealthService>,
}

impl ResourcesModule {
    #[must_use]
    pub fn new(db: DatabaseConnection, config: ResourcesConfig) -> Self {
        let repo = Arc::new(SeaOrmResourcesRepository::new(db.clone()));
        let service = Arc::new(Service::new(repo.clone()));
        let health = Arc::new(HealthService::new(
            repo,
            Duration::from_millis(config.health_timeout_ms),
        ));

        Self {
            db,
            config,
            service,
            health,
        }
    }

    /// Create the `resources` table and its index if they do not exist yet.
    ///
    /// # Errors
    /// Returns an error if the migration cannot be applied.
    pub async fn migrate(&self) -> anyhow::Result<()> {
        info!("Applying resources schema migrations");
        Migrator::up(&self.db, None)
            .await
            .context("Failed to apply resources migrations")?;
        Ok(())
    }

    #[must_use]
    pub fn router(&self) -> axum::Router {
        info!("Registering resources REST routes");
        crate::api::rest::routes::register_routes(
            self.service.clone(),
            self.health.clone(),
            &self.config,
        )
    }

    #[must_use]
    pub fn client(&self) -> Arc<dyn ResourcesClientV1> {
        Arc::new(LocalClient::new(self.service.clone()))
    }
}
