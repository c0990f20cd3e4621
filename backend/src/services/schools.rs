//! School registry operations: create and ranked listing.
//!
//! These sit between the HTTP handlers and the repository. Input is always
//! validated before anything is handed to storage.

use log::debug;

use super::error::ServiceError;
use super::ranking::rank_by_distance;
use super::validation::{parse_query_coordinate, validate_new_school};
use crate::db::repository::SchoolRepository;
use crate::db::services as db_services;
use crate::models::{RankedSchool, School};
use crate::routes::schools::{CreateSchoolRequest, ListSchoolsRequest};

/// Validate and persist a new school, returning the stored record.
pub async fn add_school<R: SchoolRepository + ?Sized>(
    repo: &R,
    request: &CreateSchoolRequest,
) -> Result<School, ServiceError> {
    let new_school = validate_new_school(request)?;

    let school = db_services::store_school(repo, &new_school).await?;
    Ok(school)
}

/// List every stored school ordered by distance from the requested point.
pub async fn list_schools_by_distance<R: SchoolRepository + ?Sized>(
    repo: &R,
    request: &ListSchoolsRequest,
) -> Result<Vec<RankedSchool>, ServiceError> {
    let query = parse_query_coordinate(request)?;

    let records = db_services::list_schools(repo).await?;

    debug!(
        "Ranking {} schools from ({}, {})",
        records.len(),
        query.latitude,
        query.longitude
    );
    rank_by_distance(query, records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repositories::LocalRepository;
    use serde_json::json;

    fn create(value: serde_json::Value) -> CreateSchoolRequest {
        serde_json::from_value(value).unwrap()
    }

    fn at(latitude: f64, longitude: f64) -> ListSchoolsRequest {
        serde_json::from_value(json!({ "latitude": latitude, "longitude": longitude })).unwrap()
    }

    #[tokio::test]
    async fn test_add_school_assigns_ids() {
        let repo = LocalRepository::new();

        let first = add_school(
            &repo,
            &create(json!({"name": "Oak", "address": "1 Main St", "latitude": 10.5, "longitude": 20.5})),
        )
        .await
        .unwrap();
        let second = add_school(
            &repo,
            &create(json!({"name": "Elm", "address": "2 Main St", "latitude": 11.0, "longitude": 20.5})),
        )
        .await
        .unwrap();

        assert!(second.id > first.id);
        assert_eq!(repo.school_count(), 2);
    }

    #[tokio::test]
    async fn test_invalid_input_not_stored() {
        let repo = LocalRepository::new();

        let result = add_school(
            &repo,
            &create(json!({"name": "Oak", "address": "1 Main St", "latitude": "ten", "longitude": 20.5})),
        )
        .await;

        assert!(matches!(result, Err(ServiceError::Validation(_))));
        assert_eq!(repo.school_count(), 0);
    }

    #[tokio::test]
    async fn test_invalid_input_never_reaches_unhealthy_store() {
        let repo = LocalRepository::new();
        repo.set_healthy(false);

        let result = add_school(&repo, &create(json!({"name": ""}))).await;
        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn test_duplicate_coordinates() {
        let repo = LocalRepository::new();
        let body = json!({"name": "Oak", "address": "1 Main St", "latitude": 10.5, "longitude": 20.5});
        add_school(&repo, &create(body)).await.unwrap();

        let result = add_school(
            &repo,
            &create(json!({"name": "Other", "address": "Elsewhere", "latitude": 10.5, "longitude": 20.5})),
        )
        .await;

        assert!(matches!(result, Err(ServiceError::DuplicateCoordinate)));
        assert_eq!(repo.school_count(), 1);
    }

    #[tokio::test]
    async fn test_storage_failure() {
        let repo = LocalRepository::new();
        repo.set_healthy(false);

        let result = add_school(
            &repo,
            &create(json!({"name": "Oak", "address": "1 Main St", "latitude": 1.0, "longitude": 2.0})),
        )
        .await;
        assert!(matches!(result, Err(ServiceError::Storage(_))));

        let result = list_schools_by_distance(&repo, &at(0.0, 0.0)).await;
        assert!(matches!(result, Err(ServiceError::Storage(_))));
    }

    #[tokio::test]
    async fn test_list_by_distance() {
        let repo = LocalRepository::new();
        for (name, lat, lon) in [("C", 1.0, 0.0), ("A", 0.0, 0.0), ("B", 0.0, 0.01)] {
            add_school(
                &repo,
                &create(json!({"name": name, "address": "x", "latitude": lat, "longitude": lon})),
            )
            .await
            .unwrap();
        }

        let ranked = list_schools_by_distance(&repo, &at(0.0, 0.0)).await.unwrap();
        let names: Vec<&str> = ranked.iter().map(|r| r.school.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_missing_query_checked_before_storage() {
        let repo = LocalRepository::new();
        repo.set_healthy(false);

        let request: ListSchoolsRequest = serde_json::from_value(json!({})).unwrap();
        let result = list_schools_by_distance(&repo, &request).await;
        assert!(matches!(result, Err(ServiceError::MissingQuery)));
    }
}
