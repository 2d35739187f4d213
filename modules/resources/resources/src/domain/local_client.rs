use async_trait::async_trait;
use resources_sdk::{
    NewResource, Resource, ResourcePage, ResourcePatch, ResourceQuery, ResourcesClientV1,
    ResourcesError,
};
use std::sync::Arc;

use crate::domain::service::Service;
use crate::domain::validation::parse_resource_id;

/// In-process client backed directly by the domain service.
pub struct LocalClient {
    service: Arc<Service>,
}

impl LocalClient {
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl ResourcesClientV1 for LocalClient {
    async fn create_resource(&self, new: NewResource) -> Result<Resource, ResourcesError> {
        self.service.create(new).await.map_err(Into::into)
    }

    async fn list_resources(&self, query: ResourceQuery) -> Result<ResourcePage, ResourcesError> {
        self.service.list(query).await.map_err(Into::into)
    }

    async fn get_resource(&self, id: &str) -> Result<Resource, ResourcesError> {
        let id = parse_resource_id(id)?;
        self.service.get_by_id(id).await.map_err(Into::into)
    }

    async fn update_resource(
        &self,
        id: &str,
        patch: ResourcePatch,
    ) -> Result<Resource, ResourcesError> {
        let id = parse_resource_id(id)?;
        self.service.update(id, patch).await.map_err(Into::into)
    }

    async fn delete_resource(&self, id: &str) -> Result<(), ResourcesError> {
        let id = parse_resource_id(id)?;
        self.service.remove(id).await.map_err(Into::into)
    }
}
