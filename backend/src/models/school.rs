//! School domain types.
//!
//! `School` is the persisted record, `NewSchool` the validated input that has
//! not been assigned an id yet, and `RankedSchool` the per-request view that
//! carries a distance from a query point.

use serde::{Deserialize, Serialize};

crate::define_id_type!(i64, SchoolId);

/// Latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Hashable identity of the pair, used for the uniqueness invariant.
    ///
    /// `-0.0` and `0.0` map to the same key, matching SQL float equality.
    pub fn key(&self) -> (u64, u64) {
        ((self.latitude + 0.0).to_bits(), (self.longitude + 0.0).to_bits())
    }
}

/// A stored school record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct School {
    pub id: SchoolId,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl School {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// Validated school data awaiting an id from the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSchool {
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl NewSchool {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    /// Attach a store-assigned id.
    pub fn into_school(self, id: SchoolId) -> School {
        School {
            id,
            name: self.name,
            address: self.address,
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// A school annotated with its distance from a query point.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedSchool {
    pub school: School,
    /// Great-circle distance in kilometres.
    pub distance_km: f64,
    /// `distance_km` rounded to the nearest kilometre; this is the sort key.
    pub rounded_km: i64,
}

impl RankedSchool {
    /// Presentation form of the distance, e.g. `"42 km"`.
    pub fn distance_label(&self) -> String {
        format!("{} km", self.rounded_km)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_school_id_roundtrip() {
        let id = SchoolId::new(42);
        assert_eq!(id.value(), 42);
        assert_eq!(i64::from(id), 42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
    }

    #[test]
    fn test_coordinate_key_treats_signed_zero_as_equal() {
        let a = Coordinate::new(0.0, 10.0);
        let b = Coordinate::new(-0.0, 10.0);
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn test_coordinate_key_distinguishes_pairs() {
        let a = Coordinate::new(10.5, 20.5);
        let b = Coordinate::new(20.5, 10.5);
        assert_ne!(a.key(), b.key());
    }

    #[test]
    fn test_into_school_keeps_fields() {
        let new = NewSchool {
            name: "Oak".to_string(),
            address: "1 Main St".to_string(),
            latitude: 10.5,
            longitude: 20.5,
        };
        let school = new.clone().into_school(SchoolId::new(3));
        assert_eq!(school.id, SchoolId::new(3));
        assert_eq!(school.name, new.name);
        assert_eq!(school.coordinate(), new.coordinate());
    }

    #[test]
    fn test_distance_label() {
        let ranked = RankedSchool {
            school: NewSchool {
                name: "Elm".to_string(),
                address: "2 Main St".to_string(),
                latitude: 0.0,
                longitude: 0.0,
            }
            .into_school(SchoolId::new(1)),
            distance_km: 41.6,
            rounded_km: 42,
        };
        assert_eq!(ranked.distance_label(), "42 km");
    }
}
