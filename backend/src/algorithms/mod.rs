//! Pure numeric routines with no storage or transport concerns.

pub mod distance;

pub use distance::{haversine_km, round_km, EARTH_RADIUS_KM};
