//! Repository-agnostic database operations.
//!
//! Thin pass-through functions over [`SchoolRepository`] that add logging and
//! error context. They work with any backend, so the HTTP layer and tests
//! call these rather than the repository directly.

use log::{debug, info, warn};

use super::models::{NewSchool, School};
use super::repository::{RepositoryResult, SchoolRepository};

// ==================== Health & Connection ====================

/// Check if the database connection is healthy.
pub async fn health_check<R: SchoolRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}

// ==================== School Operations ====================

/// Store a validated school.
///
/// # Returns
/// * `Ok(School)` - The stored record with its assigned id
/// * `Err(RepositoryError::DuplicateError)` - If the coordinates are taken
/// * `Err` if storage fails
pub async fn store_school<R: SchoolRepository + ?Sized>(
    repo: &R,
    school: &NewSchool,
) -> RepositoryResult<School> {
    debug!(
        "Service layer: storing school '{}' at ({}, {})",
        school.name, school.latitude, school.longitude
    );

    match repo.insert_school(school).await {
        Ok(stored) => {
            info!("Stored school '{}' with id {}", stored.name, stored.id);
            Ok(stored)
        }
        Err(e) if e.is_duplicate() => {
            warn!(
                "Rejected school '{}': coordinates ({}, {}) already registered",
                school.name, school.latitude, school.longitude
            );
            Err(e)
        }
        Err(e) => Err(e.with_operation("store_school")),
    }
}

/// List every stored school in insertion order.
pub async fn list_schools<R: SchoolRepository + ?Sized>(repo: &R) -> RepositoryResult<Vec<School>> {
    let schools = repo
        .list_schools()
        .await
        .map_err(|e| e.with_operation("list_schools"))?;
    debug!("Fetched {} school(s)", schools.len());
    Ok(schools)
}
