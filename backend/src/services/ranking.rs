//! Distance ranking of stored schools relative to a query point.

use super::error::ServiceError;
use crate::algorithms::{haversine_km, round_km};
use crate::models::{Coordinate, RankedSchool, School};

/// Annotate every record with its distance to `query` and order the result
/// nearest first.
///
/// Ordering uses the whole-kilometre value reported to clients, so two schools
/// that round to the same distance keep their storage order.
pub fn rank_by_distance(
    query: Coordinate,
    records: Vec<School>,
) -> Result<Vec<RankedSchool>, ServiceError> {
    if !query.latitude.is_finite() || !query.longitude.is_finite() {
        return Err(ServiceError::InvalidQuery);
    }

    let mut ranked: Vec<RankedSchool> = records
        .into_iter()
        .map(|school| {
            let distance_km = haversine_km(
                query.latitude,
                query.longitude,
                school.latitude,
                school.longitude,
            );
            RankedSchool {
                rounded_km: round_km(distance_km),
                distance_km,
                school,
            }
        })
        .collect();

    ranked.sort_by_key(|r| r.rounded_km);
    Ok(ranked)
}

#[cfg(test)]
#[path = "ranking_tests.rs"]
mod ranking_tests;
