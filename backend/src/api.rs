//! Public API surface for the backend.
//!
//! This file consolidates the wire types of the HTTP API.

pub use crate::models::{Coordinate, NewSchool, RankedSchool, School, SchoolId};
pub use crate::routes::schools::CreateSchoolRequest;
pub use crate::routes::schools::CreateSchoolResponse;
pub use crate::routes::schools::ListSchoolsQuery;
pub use crate::routes::schools::ListSchoolsRequest;
pub use crate::routes::schools::RankedSchoolDto;
