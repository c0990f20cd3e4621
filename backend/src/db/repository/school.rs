//! Core school repository trait.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::models::{NewSchool, School};

/// Repository trait for school records.
///
/// Records are create-only. Implementations own id assignment and the
/// uniqueness of the (latitude, longitude) pair.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait SchoolRepository: Send + Sync {
    // ==================== Health & Connection ====================

    /// Check if the database connection is healthy.
    ///
    /// # Returns
    /// - `Ok(true)` if connection is healthy
    /// - `Ok(false)` if connection is unhealthy but no error occurred
    /// - `Err(RepositoryError)` if an error occurred during the check
    async fn health_check(&self) -> RepositoryResult<bool>;

    // ==================== School Operations ====================

    /// Store a new school and assign it the next id.
    ///
    /// The duplicate check and the insert must be one atomic step: two
    /// concurrent calls with the same coordinates may not both succeed.
    ///
    /// # Returns
    /// * `Ok(School)` - The stored record including its assigned id
    /// * `Err(RepositoryError::DuplicateError)` - If the coordinate pair is taken
    /// * `Err(RepositoryError)` - If the operation fails
    async fn insert_school(&self, school: &NewSchool) -> RepositoryResult<School>;

    /// List every stored school in insertion order.
    async fn list_schools(&self) -> RepositoryResult<Vec<School>>;
}
