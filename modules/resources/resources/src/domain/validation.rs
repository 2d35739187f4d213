//! Identifier and payload validation.
//!
//! Everything here is pure: no store access, no side effects. Validators fail
//! fast so that malformed input never costs a store round-trip.

use resources_sdk::{NewResource, ResourcePatch, ResourceQuery};
use uuid::{Uuid, Variant};

use super::error::DomainError;
use super::fields::ResourceFields;

pub const NAME_MAX_CHARS: usize = 255;
pub const DESCRIPTION_MAX_CHARS: usize = 2000;
/// Largest `skip`/`take` a SQL `OFFSET`/`LIMIT` can bind.
pub const PAGE_BOUND_MAX: u64 = i64::MAX.unsigned_abs();

/// Length of the canonical `8-4-4-4-12` textual form.
const HYPHENATED_UUID_LEN: usize = 36;

/// Returns `true` iff `candidate` is a hyphenated RFC 4122 UUID (versions 1-8,
/// variant `10xx`), or the nil or max UUID.
///
/// Braced, URN and bare 32-digit forms are rejected even though `uuid` can
/// parse them; only the canonical wire form is an identifier.
#[must_use]
pub fn is_valid_resource_id(candidate: &str) -> bool {
    if candidate.len() != HYPHENATED_UUID_LEN {
        return false;
    }
    Uuid::parse_str(candidate).is_ok_and(|id| has_rfc4122_layout(&id))
}

fn has_rfc4122_layout(id: &Uuid) -> bool {
    if id.is_nil() || id.as_u128() == u128::MAX {
        return true;
    }
    (1..=8).contains(&id.get_version_num()) && id.get_variant() == Variant::RFC4122
}

/// Parse a caller-supplied identifier.
///
/// # Errors
/// `DomainError::InvalidArgument` when `candidate` is not UUID-shaped.
pub fn parse_resource_id(candidate: &str) -> Result<Uuid, DomainError> {
    let invalid = || {
        DomainError::invalid_argument(format!(
            "Invalid {} format (must be UUID)",
            ResourceFields::ID
        ))
    };
    if !is_valid_resource_id(candidate) {
        return Err(invalid());
    }
    Uuid::parse_str(candidate).map_err(|_| invalid())
}

/// Collects every violated constraint so callers see all of them at once.
#[derive(Default)]
struct Violations(Vec<String>);

impl Violations {
    fn push(&mut self, message: impl Into<String>) {
        self.0.push(message.into());
    }

    fn check_name(&mut self, name: &str) {
        let len = name.chars().count();
        if len == 0 {
            self.push(format!(
                "{} must contain at least 1 character",
                ResourceFields::NAME
            ));
        } else if len > NAME_MAX_CHARS {
            self.push(format!(
                "{} must contain at most {NAME_MAX_CHARS} characters",
                ResourceFields::NAME
            ));
        }
    }

    fn check_description(&mut self, description: &str) {
        if description.chars().count() > DESCRIPTION_MAX_CHARS {
            self.push(format!(
                "{} must contain at most {DESCRIPTION_MAX_CHARS} characters",
                ResourceFields::DESCRIPTION
            ));
        }
    }

    fn finish(self) -> Result<(), DomainError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(DomainError::invalid_argument(self.0.join(", ")))
        }
    }
}

/// Validate a create payload given as raw, possibly-missing fields.
///
/// # Errors
/// `DomainError::InvalidArgument` listing every violated constraint.
pub fn validate_create(name: Option<&str>, description: Option<&str>) -> Result<(), DomainError> {
    let mut violations = Violations::default();
    match name {
        Some(name) => violations.check_name(name),
        None => violations.push(format!("{} is required", ResourceFields::NAME)),
    }
    if let Some(description) = description {
        violations.check_description(description);
    }
    violations.finish()
}

/// # Errors
/// `DomainError::InvalidArgument` listing every violated constraint.
pub fn validate_new_resource(new: &NewResource) -> Result<(), DomainError> {
    validate_create(Some(&new.name), new.description.as_deref())
}

/// Validate a partial update. An empty patch is rejected outright.
///
/// # Errors
/// `DomainError::InvalidArgument` listing every violated constraint.
pub fn validate_patch(patch: &ResourcePatch) -> Result<(), DomainError> {
    if patch.is_empty() {
        return Err(DomainError::invalid_argument("At least one field required"));
    }
    let mut violations = Violations::default();
    if let Some(name) = &patch.name {
        violations.check_name(name);
    }
    if let Some(Some(description)) = &patch.description {
        violations.check_description(description);
    }
    violations.finish()
}

/// Check pagination bounds of a list query.
///
/// # Errors
/// `DomainError::InvalidArgument` listing every out-of-range field.
pub fn validate_query(query: &ResourceQuery) -> Result<(), DomainError> {
    let mut violations = Violations::default();
    for (field, value) in [("skip", query.skip), ("take", query.take)] {
        if value.is_some_and(|v| v > PAGE_BOUND_MAX) {
            violations.push(format!("{field} must be at most {PAGE_BOUND_MAX}"));
        }
    }
    violations.finish()
}
