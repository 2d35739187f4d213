use resources_sdk::Resource;
use sea_orm::ActiveValue::Set;

use super::entity;

/// Case folding shared by stored names and filter needles.
///
/// Done in Rust rather than with SQL `LOWER`, which only folds ASCII on `SQLite`.
#[must_use]
pub fn fold_name(name: &str) -> String {
    name.to_lowercase()
}

impl From<entity::Model> for Resource {
    fn from(model: entity::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            created_at: model.created_at,
        }
    }
}

impl From<Resource> for entity::ActiveModel {
    fn from(resource: Resource) -> Self {
        Self {
            id: Set(resource.id),
            name_folded: Set(fold_name(&resource.name)),
            name: Set(resource.name),
            description: Set(resource.description),
            created_at: Set(resource.created_at),
        }
    }
}
