//! Resources SDK
//!
//! This crate provides the public API for the resources module:
//! - `ResourcesClientV1` trait for in-process consumers
//! - Model types (`Resource`, `NewResource`, `ResourcePatch`, `ResourceQuery`, `ResourcePage`)
//! - Error type (`ResourcesError`)
//!
//! ```ignore
//! let client = module.client();
//! let created = client.create_resource(NewResource::named("alpha")).await?;
//! ```

#![forbid(unsafe_code)]

pub mod api;
pub mod errors;
pub mod models;

pub use api::ResourcesClientV1;
pub use errors::ResourcesError;
pub use models::{NewResource, Resource, ResourcePage, ResourcePatch, ResourceQuery};
