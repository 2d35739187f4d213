use async_trait::async_trait;
use resources_sdk::{Resource, ResourcePatch};
use sea_orm::sea_query::{Expr, LikeExpr};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select, Statement,
};
use uuid::Uuid;

use crate::domain::repo::{
    Pagination, ResourceFilter, ResourcesRepository, StoreError, StoreProbe,
};
use crate::domain::validation::PAGE_BOUND_MAX;

use super::entity::{self, Entity as ResourceEntity};
use super::mapper::fold_name;

/// Resources repository over a shared `SeaORM` connection pool.
pub struct SeaOrmResourcesRepository {
    db: DatabaseConnection,
}

impl SeaOrmResourcesRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Write `patch` over a row read earlier.
    ///
    /// # Errors
    /// `RecordNotFound` when the row was deleted after it was read.
    pub async fn apply_patch(
        &self,
        existing: entity::Model,
        patch: ResourcePatch,
    ) -> Result<Resource, StoreError> {
        let mut active: entity::ActiveModel = existing.into();
        if let Some(name) = patch.name {
            active.name_folded = ActiveValue::Set(fold_name(&name));
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = patch.description {
            active.description = ActiveValue::Set(description);
        }

        match active.update(&self.db).await {
            Ok(model) => Ok(model.into()),
            Err(DbErr::RecordNotUpdated) => Err(StoreError::RecordNotFound),
            Err(e) => Err(backend(e)),
        }
    }

    fn filtered(filter: &ResourceFilter) -> Select<ResourceEntity> {
        let mut select = ResourceEntity::find();
        if let Some(needle) = filter.name_contains.as_deref() {
            let pattern = format!("%{}%", escape_like(&fold_name(needle)));
            select = select.filter(
                Expr::col((ResourceEntity, entity::Column::NameFolded))
                    .like(LikeExpr::new(pattern).escape('\\')),
            );
        }
        select
    }
}

/// Escape LIKE metacharacters so the needle matches literally.
fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

fn backend(err: DbErr) -> StoreError {
    StoreError::Backend(err.into())
}

#[async_trait]
impl ResourcesRepository for SeaOrmResourcesRepository {
    async fn create(&self, resource: Resource) -> Result<Resource, StoreError> {
        let active: entity::ActiveModel = resource.into();
        let model = active.insert(&self.db).await.map_err(backend)?;
        Ok(model.into())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Resource>, StoreError> {
        let model = ResourceEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(backend)?;
        Ok(model.map(Into::into))
    }

    async fn find_many(
        &self,
        filter: &ResourceFilter,
        page: Pagination,
    ) -> Result<Vec<Resource>, StoreError> {
        // SQLite rejects OFFSET without LIMIT.
        let take = page
            .take
            .or_else(|| page.skip.map(|_| PAGE_BOUND_MAX));
        let models = Self::filtered(filter)
            .order_by_desc(entity::Column::CreatedAt)
            .offset(page.skip)
            .limit(take)
            .all(&self.db)
            .await
            .map_err(backend)?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn count(&self, filter: &ResourceFilter) -> Result<u64, StoreError> {
        Self::filtered(filter)
            .count(&self.db)
            .await
            .map_err(backend)
    }

    async fn update(&self, id: Uuid, patch: ResourcePatch) -> Result<Resource, StoreError> {
        let Some(existing) = ResourceEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(backend)?
        else {
            return Err(StoreError::RecordNotFound);
        };

        self.apply_patch(existing, patch).await
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let result = ResourceEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(backend)?;
        if result.rows_affected == 0 {
            return Err(StoreError::RecordNotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl StoreProbe for SeaOrmResourcesRepository {
    async fn ping(&self) -> Result<(), StoreError> {
        let backend_kind = self.db.get_database_backend();
        self.db
            .execute(Statement::from_string(backend_kind, "SELECT 1"))
            .await
            .map(|_| ())
            .map_err(backend)
    }
}
