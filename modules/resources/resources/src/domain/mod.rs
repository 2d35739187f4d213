pub mod error;
pub mod fields;
pub mod health;
pub mod local_client;
pub mod repo;
pub mod service;
pub mod validation;
