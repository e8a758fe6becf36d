//! # Posts Core
//!
//! The domain layer of the latest-post service.
//! This crate contains the Post lifecycle rules and the persistence ports,
//! with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::DomainError;
pub use service::PostService;
