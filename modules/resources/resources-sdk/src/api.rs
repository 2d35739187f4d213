//! `ResourcesClientV1` trait definition.
//!
//! This trait defines the public in-process API for the resources module (Version 1).

use async_trait::async_trait;

use crate::errors::ResourcesError;
use crate::models::{NewResource, Resource, ResourcePage, ResourcePatch, ResourceQuery};

/// Public API trait for the resources module (Version 1).
///
/// Identifiers are passed as strings so that malformed ids are rejected with
/// `ResourcesError::InvalidArgument` rather than `NotFound`.
#[async_trait]
pub trait ResourcesClientV1: Send + Sync {
    /// Create a resource. Duplicate names are allowed.
    async fn create_resource(&self, new: NewResource) -> Result<Resource, ResourcesError>;

    /// List resources, newest first.
    async fn list_resources(&self, query: ResourceQuery) -> Result<ResourcePage, ResourcesError>;

    /// Fetch a single resource.
    async fn get_resource(&self, id: &str) -> Result<Resource, ResourcesError>;

    /// Partially update a resource. At least one field must be present.
    async fn update_resource(
        &self,
        id: &str,
        patch: ResourcePatch,
    ) -> Result<Resource, ResourcesError>;

    /// Hard-delete a resource. Deleting twice reports `NotFound`.
    async fn delete_resource(&self, id: &str) -> Result<(), ResourcesError>;
}
