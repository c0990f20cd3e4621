//! Repository trait definitions for school storage.
//!
//! # Module Organization
//!
//! - [`error`]: Error types for repository operations
//! - [`school`]: Create/list operations for school records

pub mod error;
pub mod school;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};
pub use school::SchoolRepository;
