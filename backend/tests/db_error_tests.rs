//! Tests for db::repository::error - error constructors and context.

use school_locator::db::repository::{ErrorContext, RepositoryError};
use school_locator::services::ServiceError;

#[test]
fn test_error_context_chaining() {
    let ctx = ErrorContext::new("insert_school")
        .with_entity("school")
        .with_entity_id(42)
        .with_details("constraint schools_latitude_longitude_key");

    assert_eq!(ctx.operation.as_deref(), Some("insert_school"));
    assert_eq!(ctx.entity.as_deref(), Some("school"));
    assert_eq!(ctx.entity_id.as_deref(), Some("42"));
    assert_eq!(
        ctx.details.as_deref(),
        Some("constraint schools_latitude_longitude_key")
    );
}

#[test]
fn test_error_context_display() {
    let ctx = ErrorContext::new("list_schools").with_entity("school");
    assert_eq!(ctx.to_string(), "[operation=list_schools, entity=school]");
    assert_eq!(ErrorContext::default().to_string(), "[]");
}

#[test]
fn test_connection_error_context() {
    let err = RepositoryError::connection("pool exhausted");
    assert!(!err.is_duplicate());
    assert_eq!(err.to_string(), "Connection error: pool exhausted []");

    let err = RepositoryError::connection_with_context("refused", ErrorContext::new("ping"));
    assert_eq!(err.context().operation.as_deref(), Some("ping"));
    assert!(err.to_string().contains("operation=ping"));
}

#[test]
fn test_only_duplicates_are_duplicates() {
    assert!(RepositoryError::duplicate("taken").is_duplicate());
    assert!(!RepositoryError::query("syntax").is_duplicate());
    assert!(!RepositoryError::configuration("no url").is_duplicate());
    assert!(!RepositoryError::internal("panic").is_duplicate());
}

#[test]
fn test_with_operation_keeps_variant() {
    let err = RepositoryError::duplicate("taken").with_operation("store_school");
    assert!(err.is_duplicate());
    assert_eq!(err.context().operation.as_deref(), Some("store_school"));
    assert!(err.to_string().starts_with("Duplicate entry: taken"));
}

#[test]
fn test_string_conversions_are_internal() {
    let err: RepositoryError = "boom".into();
    assert!(matches!(err, RepositoryError::InternalError { .. }));
    let err: RepositoryError = String::from("boom").into();
    assert!(err.to_string().contains("boom"));
}

#[test]
fn test_service_error_mapping() {
    assert!(matches!(
        ServiceError::from(RepositoryError::duplicate("taken")),
        ServiceError::DuplicateCoordinate
    ));
    assert!(matches!(
        ServiceError::from(RepositoryError::connection("down")),
        ServiceError::Storage(_)
    ));
}
