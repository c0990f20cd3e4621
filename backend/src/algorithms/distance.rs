//! Great-circle distance on a spherical Earth.

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometres between two points given in decimal degrees.
///
/// `(lat1, lon1)` is the origin and `(lat2, lon2)` the destination; the result
/// is symmetric and never negative.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    // Clamp guards against `a` drifting past 1.0 for near-antipodal points.
    let a = ((d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Round a distance to whole kilometres, ties away from zero.
pub fn round_km(distance_km: f64) -> i64 {
    distance_km.round() as i64
}
