//! Service layer for business logic and orchestration.
//!
//! Services sit between the HTTP handlers and the repository: they validate
//! requests, call into storage and rank results.

pub mod error;
pub mod ranking;
pub mod schools;
pub mod validation;

pub use error::ServiceError;
pub use ranking::rank_by_distance;
pub use schools::{add_school, list_schools_by_distance};
pub use validation::{parse_query_coordinate, validate_new_school};
