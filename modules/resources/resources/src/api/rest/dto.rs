//! REST DTOs. These carry the serde and utoipa derives; SDK models stay transport-free.

use resources_sdk::{NewResource, Resource, ResourcePage, ResourcePatch, ResourceQuery};
use serde::{Deserialize, Deserializer, Serialize};
use time::OffsetDateTime;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::health::HealthStatus;
use crate::domain::validation;

/// Response DTO for a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDto {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<Resource> for ResourceDto {
    fn from(resource: Resource) -> Self {
        Self {
            id: resource.id,
            name: resource.name,
            description: resource.description,
            created_at: resource.created_at,
        }
    }
}

/// Request DTO for creating a resource. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateResourceReq {
    #[serde(default)]
    #[schema(value_type = String, min_length = 1, max_length = 255)]
    pub name: Option<String>,
    #[serde(default)]
    #[schema(max_length = 2000)]
    pub description: Option<String>,
}

impl CreateResourceReq {
    /// # Errors
    /// `InvalidArgument` listing every violated constraint.
    pub fn into_new_resource(self) -> Result<NewResource, DomainError> {
        validation::validate_create(self.name.as_deref(), self.description.as_deref())?;
        Ok(NewResource {
            // presence checked by validate_create
            name: self.name.unwrap_or_default(),
            description: self.description,
        })
    }
}

/// Request DTO for a partial update.
///
/// `description` is tri-state: absent leaves it unchanged, `null` clears it.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateResourceReq {
    #[serde(default)]
    #[schema(min_length = 1, max_length = 255)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>, max_length = 2000)]
    pub description: Option<Option<String>>,
}

impl From<UpdateResourceReq> for ResourcePatch {
    fn from(req: UpdateResourceReq) -> Self {
        Self {
            name: req.name,
            description: req.description,
        }
    }
}

/// Distinguishes an explicit `null` from a missing field.
fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Query string for `GET /resources`.
///
/// Pagination values arrive as raw strings so that malformed numbers produce a
/// field-specific message instead of a generic decoder error.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListResourcesQuery {
    /// Case-insensitive substring of the name. Empty means no filter.
    pub name: Option<String>,
    /// Number of rows to skip.
    #[param(value_type = Option<u64>)]
    pub skip: Option<String>,
    /// Maximum number of rows to return.
    #[param(value_type = Option<u64>)]
    pub take: Option<String>,
}

impl ListResourcesQuery {
    /// # Errors
    /// `InvalidArgument` when `skip` or `take` is not a non-negative integer.
    pub fn into_query(self) -> Result<ResourceQuery, DomainError> {
        Ok(ResourceQuery {
            name: self.name,
            skip: parse_count("skip", self.skip.as_deref())?,
            take: parse_count("take", self.take.as_deref())?,
        })
    }
}

fn parse_count(field: &str, raw: Option<&str>) -> Result<Option<u64>, DomainError> {
    match raw {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse::<u64>().map(Some).map_err(|_| {
            DomainError::invalid_argument(format!("{field} must be a non-negative integer"))
        }),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListResourcesResponse {
    pub items: Vec<ResourceDto>,
    /// Size of the whole filtered set, independent of `skip`/`take`.
    pub total: u64,
}

impl From<ResourcePage> for ListResourcesResponse {
    fn from(page: ResourcePage) -> Self {
        Self {
            items: page.items.into_iter().map(Into::into).collect(),
            total: page.total,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    /// `ok` or `degraded`.
    pub status: String,
    /// `up` or `down`.
    pub db: String,
}

impl From<HealthStatus> for HealthDto {
    fn from(status: HealthStatus) -> Self {
        Self {
            status: status.status.as_str().to_owned(),
            db: status.db.as_str().to_owned(),
        }
    }
}

/// Uniform error body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}
