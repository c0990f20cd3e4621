//! In-memory local repository implementation.
//!
//! Suitable for unit testing and local development. Records live in a `Vec`
//! in insertion order next to a set of coordinate keys; both sit behind one
//! lock so the duplicate check and the insert cannot interleave.

use async_trait::async_trait;
use log::debug;
use parking_lot::RwLock;
use std::collections::HashSet;
use std::sync::Arc;

use crate::db::repository::*;
use crate::models::{NewSchool, School, SchoolId};

/// In-memory local repository.
///
/// # Example
/// ```
/// use school_locator::db::repositories::LocalRepository;
/// use school_locator::db::repository::SchoolRepository;
/// use school_locator::models::NewSchool;
///
/// let runtime = tokio::runtime::Runtime::new().unwrap();
/// runtime.block_on(async {
///     let repo = LocalRepository::new();
///     let school = repo
///         .insert_school(&NewSchool {
///             name: "Oak".into(),
///             address: "1 Main St".into(),
///             latitude: 10.5,
///             longitude: 20.5,
///         })
///         .await
///         .unwrap();
///     assert_eq!(school.id.value(), 1);
/// });
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    schools: Vec<School>,
    coordinates: HashSet<(u64, u64)>,

    // ID counter
    next_school_id: i64,

    // Connection health
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            schools: Vec::new(),
            coordinates: HashSet::new(),
            next_school_id: 1,
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    /// Clear all data from the repository.
    pub fn clear(&self) {
        let mut data = self.data.write();
        *data = LocalData {
            is_healthy: data.is_healthy,
            ..Default::default()
        };
    }

    /// Get the number of schools stored.
    pub fn school_count(&self) -> usize {
        self.data.read().schools.len()
    }

    fn unhealthy_error(operation: &str) -> RepositoryError {
        RepositoryError::connection_with_context(
            "Database is not healthy",
            ErrorContext::new(operation).with_entity("school"),
        )
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SchoolRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn insert_school(&self, school: &NewSchool) -> RepositoryResult<School> {
        let mut data = self.data.write();
        if !data.is_healthy {
            return Err(Self::unhealthy_error("insert_school"));
        }

        let coordinate = school.coordinate();
        if !data.coordinates.insert(coordinate.key()) {
            return Err(RepositoryError::duplicate_with_context(
                format!(
                    "coordinate ({}, {}) already stored",
                    coordinate.latitude, coordinate.longitude
                ),
                ErrorContext::new("insert_school").with_entity("school"),
            ));
        }

        let id = SchoolId::new(data.next_school_id);
        data.next_school_id += 1;

        let stored = school.clone().into_school(id);
        data.schools.push(stored.clone());
        debug!("Stored school {} in local repository", id);

        Ok(stored)
    }

    async fn list_schools(&self) -> RepositoryResult<Vec<School>> {
        let data = self.data.read();
        if !data.is_healthy {
            return Err(Self::unhealthy_error("list_schools"));
        }
        Ok(data.schools.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_school(name: &str, latitude: f64, longitude: f64) -> NewSchool {
        NewSchool {
            name: name.to_string(),
            address: format!("{} Street", name),
            latitude,
            longitude,
        }
    }

    #[tokio::test]
    async fn test_ids_are_sequential() {
        let repo = LocalRepository::new();
        let a = repo.insert_school(&new_school("A", 1.0, 1.0)).await.unwrap();
        let b = repo.insert_school(&new_school("B", 2.0, 2.0)).await.unwrap();
        assert_eq!(a.id.value(), 1);
        assert_eq!(b.id.value(), 2);
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let repo = LocalRepository::new();
        for (i, name) in ["C", "A", "B"].iter().enumerate() {
            repo.insert_school(&new_school(name, i as f64, 0.0))
                .await
                .unwrap();
        }
        let names: Vec<String> = repo
            .list_schools()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[tokio::test]
    async fn test_duplicate_coordinate_rejected() {
        let repo = LocalRepository::new();
        repo.insert_school(&new_school("A", 10.5, 20.5)).await.unwrap();
        let err = repo
            .insert_school(&new_school("Other", 10.5, 20.5))
            .await
            .unwrap_err();
        assert!(err.is_duplicate());
        assert_eq!(repo.school_count(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_does_not_consume_id() {
        let repo = LocalRepository::new();
        repo.insert_school(&new_school("A", 1.0, 1.0)).await.unwrap();
        let _ = repo.insert_school(&new_school("B", 1.0, 1.0)).await;
        let c = repo.insert_school(&new_school("C", 2.0, 2.0)).await.unwrap();
        assert_eq!(c.id.value(), 2);
    }

    #[tokio::test]
    async fn test_unhealthy_repository_fails() {
        let repo = LocalRepository::new();
        repo.set_healthy(false);
        assert!(!repo.health_check().await.unwrap());

        let err = repo.list_schools().await.unwrap_err();
        assert!(matches!(err, RepositoryError::ConnectionError { .. }));
        let err = repo
            .insert_school(&new_school("A", 1.0, 1.0))
            .await
            .unwrap_err();
        assert!(!err.is_duplicate());
        assert_eq!(err.context().operation.as_deref(), Some("insert_school"));
    }

    #[tokio::test]
    async fn test_clear_resets_ids_and_coordinates() {
        let repo = LocalRepository::new();
        repo.insert_school(&new_school("A", 1.0, 1.0)).await.unwrap();
        repo.clear();
        assert_eq!(repo.school_count(), 0);
        let again = repo.insert_school(&new_school("A", 1.0, 1.0)).await.unwrap();
        assert_eq!(again.id.value(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_duplicates_only_one_wins() {
        let repo = LocalRepository::new();
        let mut handles = Vec::new();
        for i in 0..16 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move {
                repo.insert_school(&new_school(&format!("S{}", i), 45.0, 7.0))
                    .await
            }));
        }

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                successes += 1;
            }
        }
        assert_eq!(successes, 1);
        assert_eq!(repo.school_count(), 1);
    }
}
