use resources_sdk::ResourcesError;
use thiserror::Error;
use uuid::Uuid;

use super::repo::StoreError;

/// Domain error taxonomy shared by every resource operation.
#[derive(Error, Debug)]
pub enum DomainError {
    /// Malformed identifier or payload; the message lists the violated constraints.
    #[error("{0}")]
    InvalidArgument(String),

    #[error("Resource not found: {id}")]
    NotFound { id: Uuid },

    /// Store or infrastructure failure. The payload is for server-side logs only.
    #[error("Internal error: {0:#}")]
    Internal(anyhow::Error),
}

impl DomainError {
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    #[must_use]
    pub fn not_found(id: Uuid) -> Self {
        Self::NotFound { id }
    }

    #[must_use]
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }

    /// Translate a store failure of an operation that targeted `id`.
    ///
    /// The store's missing-record sentinel becomes `NotFound` no matter which
    /// operation reported it; everything else stays opaque.
    #[must_use]
    pub fn from_store(err: StoreError, id: Uuid) -> Self {
        match err {
            StoreError::RecordNotFound => Self::not_found(id),
            StoreError::Backend(e) => Self::Internal(e),
        }
    }
}

/// Unkeyed operations (create, list, count) have no id to report, so a
/// missing-record signal there is an unexpected store failure.
impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::RecordNotFound => {
                Self::Internal(anyhow::anyhow!("store reported a missing record"))
            }
            StoreError::Backend(e) => Self::Internal(e),
        }
    }
}

/// Convert domain errors to SDK errors for public API consumption.
impl From<DomainError> for ResourcesError {
    fn from(domain_error: DomainError) -> Self {
        match domain_error {
            DomainError::InvalidArgument(message) => ResourcesError::invalid_argument(message),
            DomainError::NotFound { id } => ResourcesError::not_found(id),
            DomainError::Internal(_) => ResourcesError::internal(),
        }
    }
}
