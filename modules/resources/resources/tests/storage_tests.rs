#![allow(clippy::unwrap_used, clippy::expect_used)]

//! `SeaORM` repository against in-memory `SQLite`.

mod common;

use common::{inmem_db, resource_aged};
use resources::domain::repo::{Pagination, ResourceFilter, ResourcesRepository, StoreError};
use resources::domain::validation::PAGE_BOUND_MAX;
use resources::infra::storage::{SeaOrmResourcesRepository, entity};
use resources::ResourcePatch;
use sea_orm::EntityTrait;
use uuid::Uuid;

async fn seeded_repo(rows: &[(&str, i64)]) -> SeaOrmResourcesRepository {
    let repo = SeaOrmResourcesRepository::new(inmem_db().await);
    for (name, age) in rows {
        repo.create(resource_aged(name, None, *age)).await.unwrap();
    }
    repo
}

fn names(rows: &[resources::Resource]) -> Vec<&str> {
    rows.iter().map(|r| r.name.as_str()).collect()
}

#[tokio::test]
async fn create_round_trips_every_field() {
    let repo = SeaOrmResourcesRepository::new(inmem_db().await);
    let resource = resource_aged("alpha", Some("first"), 0);

    repo.create(resource.clone()).await.unwrap();
    let found = repo.find_by_id(resource.id).await.unwrap().unwrap();

    assert_eq!(found, resource);
}

#[tokio::test]
async fn find_by_id_returns_none_for_unknown_id() {
    let repo = SeaOrmResourcesRepository::new(inmem_db().await);
    assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn find_many_orders_newest_first() {
    let repo = seeded_repo(&[("old", 30), ("newest", 1), ("middle", 10)]).await;

    let rows = repo
        .find_many(&ResourceFilter::default(), Pagination::default())
        .await
        .unwrap();

    assert_eq!(names(&rows), ["newest", "middle", "old"]);
}

#[tokio::test]
async fn find_many_applies_skip_and_take_after_ordering() {
    let repo = seeded_repo(&[("a", 5), ("b", 4), ("c", 3), ("d", 2), ("e", 1)]).await;

    let rows = repo
        .find_many(
            &ResourceFilter::default(),
            Pagination {
                skip: Some(1),
                take: Some(2),
            },
        )
        .await
        .unwrap();

    assert_eq!(names(&rows), ["d", "c"]);
}

#[tokio::test]
async fn name_filter_is_case_insensitive_substring() {
    let repo = seeded_repo(&[("Alpha", 3), ("beta", 2), ("ALPINE", 1)]).await;

    for needle in ["alp", "ALP", "aLp"] {
        let filter = ResourceFilter {
            name_contains: Some(needle.to_owned()),
        };
        let rows = repo
            .find_many(&filter, Pagination::default())
            .await
            .unwrap();
        assert_eq!(names(&rows), ["ALPINE", "Alpha"]);
        assert_eq!(repo.count(&filter).await.unwrap(), 2);
    }
}

#[tokio::test]
async fn name_filter_folds_non_ascii_case() {
    let repo = seeded_repo(&[("\u{c9}cole", 2), ("ecole", 1)]).await;

    for needle in ["\u{c9}cole", "\u{c9}", "\u{e9}", "\u{c9}COLE", "\u{e9}COLE"] {
        let filter = ResourceFilter {
            name_contains: Some(needle.to_owned()),
        };
        assert_eq!(repo.count(&filter).await.unwrap(), 1, "{needle}");
        let rows = repo
            .find_many(&filter, Pagination::default())
            .await
            .unwrap();
        assert_eq!(names(&rows), ["\u{c9}cole"]);
    }
}

#[tokio::test]
async fn renamed_resource_is_found_by_its_new_name() {
    let repo = SeaOrmResourcesRepository::new(inmem_db().await);
    let resource = resource_aged("alpha", None, 0);
    repo.create(resource.clone()).await.unwrap();

    repo.update(
        resource.id,
        ResourcePatch {
            name: Some("\u{d6}ST".to_owned()),
            description: None,
        },
    )
    .await
    .unwrap();

    let by_new = ResourceFilter {
        name_contains: Some("\u{f6}st".to_owned()),
    };
    let by_old = ResourceFilter {
        name_contains: Some("alpha".to_owned()),
    };
    assert_eq!(repo.count(&by_new).await.unwrap(), 1);
    assert_eq!(repo.count(&by_old).await.unwrap(), 0);
}

#[tokio::test]
async fn find_many_skips_without_a_take() {
    let repo = seeded_repo(&[("a", 3), ("b", 2), ("c", 1)]).await;

    let rows = repo
        .find_many(
            &ResourceFilter::default(),
            Pagination {
                skip: Some(1),
                take: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(names(&rows), ["b", "a"]);
}

#[tokio::test]
async fn find_many_accepts_largest_bindable_bounds() {
    let repo = seeded_repo(&[("a", 1)]).await;

    let rows = repo
        .find_many(
            &ResourceFilter::default(),
            Pagination {
                skip: Some(PAGE_BOUND_MAX),
                take: Some(PAGE_BOUND_MAX),
            },
        )
        .await
        .unwrap();

    assert!(rows.is_empty());
}

#[tokio::test]
async fn name_filter_treats_like_wildcards_literally() {
    let repo = seeded_repo(&[("100% cotton", 2), ("1000 cotton", 1), ("a_b", 4), ("axb", 3)]).await;

    let percent = ResourceFilter {
        name_contains: Some("0%".to_owned()),
    };
    let underscore = ResourceFilter {
        name_contains: Some("_".to_owned()),
    };

    assert_eq!(repo.count(&percent).await.unwrap(), 1);
    assert_eq!(repo.count(&underscore).await.unwrap(), 1);
}

#[tokio::test]
async fn count_ignores_pagination_and_matches_filter() {
    let repo = seeded_repo(&[("item-1", 3), ("item-2", 2), ("other", 1)]).await;

    let filter = ResourceFilter {
        name_contains: Some("item".to_owned()),
    };

    assert_eq!(repo.count(&filter).await.unwrap(), 2);
    assert_eq!(repo.count(&ResourceFilter::default()).await.unwrap(), 3);
}

#[tokio::test]
async fn update_changes_only_present_fields() {
    let repo = SeaOrmResourcesRepository::new(inmem_db().await);
    let resource = resource_aged("alpha", Some("keep"), 0);
    repo.create(resource.clone()).await.unwrap();

    let updated = repo
        .update(
            resource.id,
            ResourcePatch {
                name: Some("renamed".to_owned()),
                description: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "renamed");
    assert_eq!(updated.description.as_deref(), Some("keep"));
    assert_eq!(updated.created_at, resource.created_at);
    assert_eq!(updated.id, resource.id);
}

#[tokio::test]
async fn update_can_clear_description() {
    let repo = SeaOrmResourcesRepository::new(inmem_db().await);
    let resource = resource_aged("alpha", Some("drop"), 0);
    repo.create(resource.clone()).await.unwrap();

    let updated = repo
        .update(
            resource.id,
            ResourcePatch {
                name: None,
                description: Some(None),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.description, None);
    let stored = repo.find_by_id(resource.id).await.unwrap().unwrap();
    assert_eq!(stored.description, None);
}

#[tokio::test]
async fn update_of_missing_row_reports_record_not_found() {
    let repo = SeaOrmResourcesRepository::new(inmem_db().await);

    let err = repo
        .update(
            Uuid::new_v4(),
            ResourcePatch {
                name: Some("x".to_owned()),
                description: None,
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, StoreError::RecordNotFound));
}

#[tokio::test]
async fn row_deleted_between_read_and_write_reports_record_not_found() {
    let db = inmem_db().await;
    let repo = SeaOrmResourcesRepository::new(db.clone());
    let resource = resource_aged("alpha", None, 0);
    repo.create(resource.clone()).await.unwrap();

    let stale = entity::Entity::find_by_id(resource.id)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    repo.delete(resource.id).await.unwrap();

    let err = repo
        .apply_patch(
            stale,
            ResourcePatch {
                name: Some("late".to_owned()),
                description: None,
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, StoreError::RecordNotFound));
    assert!(repo.find_by_id(resource.id).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_reports_record_not_found_the_second_time() {
    let repo = SeaOrmResourcesRepository::new(inmem_db().await);
    let resource = resource_aged("alpha", None, 0);
    repo.create(resource.clone()).await.unwrap();

    repo.delete(resource.id).await.unwrap();
    let err = repo.delete(resource.id).await.unwrap_err();

    assert!(matches!(err, StoreError::RecordNotFound));
    assert!(repo.find_by_id(resource.id).await.unwrap().is_none());
}
