//! Shared data models re-exported for database layer consumers.

pub use crate::models::{Coordinate, NewSchool, School, SchoolId};
