use std::sync::Arc;

use resources_sdk::{NewResource, Resource, ResourcePage, ResourcePatch, ResourceQuery};
use time::OffsetDateTime;
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

use super::error::DomainError;
use super::repo::{Pagination, ResourceFilter, ResourcesRepository};
use super::validation;

// ============================================================================
// Service Implementation
// ============================================================================

/// Domain service for resources.
///
/// Stateless between calls: every operation round-trips to the injected store.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn ResourcesRepository>,
}

impl Service {
    #[must_use]
    pub fn new(repo: Arc<dyn ResourcesRepository>) -> Self {
        Self { repo }
    }

    /// Create a resource. Names are not unique; a retried call creates a second row.
    ///
    /// # Errors
    /// `InvalidArgument` on payload violations, `Internal` on store failure.
    #[instrument(skip(self, new), fields(name = %new.name))]
    pub async fn create(&self, new: NewResource) -> Result<Resource, DomainError> {
        info!("Creating resource");

        validation::validate_new_resource(&new)?;

        let resource = Resource {
            id: Uuid::now_v7(),
            name: new.name,
            description: new.description,
            created_at: OffsetDateTime::now_utc(),
        };

        let created = self
            .repo
            .create(resource)
            .await
            .map_err(|e| log_internal(e.into()))?;

        info!(resource_id = %created.id, "Successfully created resource");
        Ok(created)
    }

    /// List resources newest first. `total` counts the whole filtered set.
    ///
    /// # Errors
    /// `InvalidArgument` when `skip` or `take` exceeds the store's range,
    /// `Internal` on store failure.
    #[instrument(skip(self))]
    pub async fn list(&self, query: ResourceQuery) -> Result<ResourcePage, DomainError> {
        debug!("Listing resources");

        validation::validate_query(&query)?;

        let filter = ResourceFilter {
            name_contains: query.name.filter(|name| !name.is_empty()),
        };
        let page = Pagination {
            skip: query.skip,
            take: query.take,
        };

        let (items, total) = tokio::try_join!(
            self.repo.find_many(&filter, page),
            self.repo.count(&filter)
        )
        .map_err(|e| log_internal(e.into()))?;

        debug!(returned = items.len(), total, "Listed resources");
        Ok(ResourcePage { items, total })
    }

    /// # Errors
    /// `NotFound` when no resource has `id`, `Internal` on store failure.
    #[instrument(skip(self), fields(resource_id = %id))]
    pub async fn get_by_id(&self, id: Uuid) -> Result<Resource, DomainError> {
        debug!("Getting resource by id");

        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| log_internal(DomainError::from_store(e, id)))?
            .ok_or_else(|| DomainError::not_found(id))
    }

    /// Apply only the fields present in `patch`.
    ///
    /// # Errors
    /// `InvalidArgument` for an empty or invalid patch (checked before any
    /// store access), `NotFound` when `id` is gone at write time.
    #[instrument(skip(self, patch), fields(resource_id = %id))]
    pub async fn update(&self, id: Uuid, patch: ResourcePatch) -> Result<Resource, DomainError> {
        info!("Updating resource");

        validation::validate_patch(&patch)?;

        let updated = self
            .repo
            .update(id, patch)
            .await
            .map_err(|e| log_internal(DomainError::from_store(e, id)))?;

        info!("Successfully updated resource");
        Ok(updated)
    }

    /// Hard delete. A second delete of the same id reports `NotFound`.
    ///
    /// # Errors
    /// `NotFound` when `id` does not exist, `Internal` on store failure.
    #[instrument(skip(self), fields(resource_id = %id))]
    pub async fn remove(&self, id: Uuid) -> Result<(), DomainError> {
        info!("Deleting resource");

        self.repo
            .delete(id)
            .await
            .map_err(|e| log_internal(DomainError::from_store(e, id)))?;

        info!("Successfully deleted resource");
        Ok(())
    }
}

/// Record opaque failures server-side before they are flattened for callers.
fn log_internal(err: DomainError) -> DomainError {
    if let DomainError::Internal(ref cause) = err {
        error!(error = ?cause, "Resource store operation failed");
    }
    err
}
