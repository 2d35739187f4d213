use async_trait::async_trait;
use resources_sdk::{Resource, ResourcePatch};
use thiserror::Error;
use uuid::Uuid;

/// Failure reported by a resource store.
///
/// `RecordNotFound` is the single named condition a store raises when a keyed
/// mutation finds no row; callers must never inspect vendor error codes.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("record not found")]
    RecordNotFound,

    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

/// Selection applied to both the page query and the count query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceFilter {
    /// Case-insensitive substring of `name`. `None` matches everything.
    pub name_contains: Option<String>,
}

/// Offset pagination over the filtered, ordered set. `None` means unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    pub skip: Option<u64>,
    pub take: Option<u64>,
}

/// Persistence contract for resources.
///
/// Implementations own identity: the row is stored exactly as given and
/// `find_many` returns rows ordered by `created_at` descending.
#[async_trait]
pub trait ResourcesRepository: Send + Sync {
    async fn create(&self, resource: Resource) -> Result<Resource, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Resource>, StoreError>;

    async fn find_many(
        &self,
        filter: &ResourceFilter,
        page: Pagination,
    ) -> Result<Vec<Resource>, StoreError>;

    async fn count(&self, filter: &ResourceFilter) -> Result<u64, StoreError>;

    /// Apply only the fields present in `patch`.
    /// Returns `RecordNotFound` when no row has `id` at write time.
    async fn update(&self, id: Uuid, patch: ResourcePatch) -> Result<Resource, StoreError>;

    /// Returns `RecordNotFound` when no row has `id` at delete time.
    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;
}

/// Minimal round-trip against the store, used by the health check.
#[async_trait]
pub trait StoreProbe: Send + Sync {
    async fn ping(&self) -> Result<(), StoreError>;
}
