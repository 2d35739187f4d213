//! Resources Module Implementation
//!
//! The public API is defined in `resources-sdk` and re-exported here.

pub use resources_sdk::{
    NewResource, Resource, ResourcePage, ResourcePatch, ResourceQuery, ResourcesClientV1,
    ResourcesError,
};

pub mod module;
pub use module::ResourcesModule;

pub mod config;
pub use config::ResourcesConfig;

#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
