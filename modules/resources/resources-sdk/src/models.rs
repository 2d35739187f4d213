//! Public models for the resources module.
//!
//! These are transport-agnostic data structures that define the contract
//! between the resources module and its consumers.

use time::OffsetDateTime;
use uuid::Uuid;

/// A stored resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub id: Uuid,
    pub name: String,
    /// `None` is stored as SQL `NULL`; an empty string is kept as-is.
    pub description: Option<String>,
    pub created_at: OffsetDateTime,
}

/// Data for creating a new resource. The store side assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewResource {
    pub name: String,
    pub description: Option<String>,
}

impl NewResource {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Partial update data for a resource.
///
/// Only fields that are `Some` are applied. `description` is tri-state:
/// `None` leaves it unchanged, `Some(None)` clears it, `Some(Some(_))` sets it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResourcePatch {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
}

impl ResourcePatch {
    /// `true` when the patch carries no field at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}

/// Listing parameters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResourceQuery {
    /// Case-insensitive substring match on `name`.
    pub name: Option<String>,
    pub skip: Option<u64>,
    pub take: Option<u64>,
}

/// One page of resources plus the size of the whole filtered set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePage {
    pub items: Vec<Resource>,
    pub total: u64,
}
