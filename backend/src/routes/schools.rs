use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::{RankedSchool, School, SchoolId};

// =========================================================
// School registry types + routes
// =========================================================

pub const ADD_SCHOOL: &str = "/addSchool";
pub const LIST_SCHOOLS: &str = "/listSchools";
pub const HEALTH: &str = "/health";

pub const ADD_SCHOOL_SUCCESS_MESSAGE: &str = "School added successfully";

/// Raw create payload.
///
/// Fields are kept as loose JSON so that type errors surface as field-specific
/// validation messages instead of a generic body rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateSchoolRequest {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub address: Option<Value>,
    #[serde(default)]
    pub latitude: Option<Value>,
    #[serde(default)]
    pub longitude: Option<Value>,
}

/// Take a field out of a decoded JSON object, treating `null` as absent.
fn take_field(fields: &mut Map<String, Value>, key: &str) -> Option<Value> {
    fields.remove(key).filter(|value| !value.is_null())
}

impl From<Map<String, Value>> for CreateSchoolRequest {
    fn from(mut fields: Map<String, Value>) -> Self {
        Self {
            name: take_field(&mut fields, "name"),
            address: take_field(&mut fields, "address"),
            latitude: take_field(&mut fields, "latitude"),
            longitude: take_field(&mut fields, "longitude"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSchoolResponse {
    pub message: String,
    #[serde(rename = "schoolId")]
    pub school_id: SchoolId,
}

impl From<&School> for CreateSchoolResponse {
    fn from(school: &School) -> Self {
        Self {
            message: ADD_SCHOOL_SUCCESS_MESSAGE.to_string(),
            school_id: school.id,
        }
    }
}

/// Query point for a ranked listing, as received in a JSON body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListSchoolsRequest {
    #[serde(default)]
    pub latitude: Option<Value>,
    #[serde(default)]
    pub longitude: Option<Value>,
}

impl From<Map<String, Value>> for ListSchoolsRequest {
    fn from(mut fields: Map<String, Value>) -> Self {
        Self {
            latitude: take_field(&mut fields, "latitude"),
            longitude: take_field(&mut fields, "longitude"),
        }
    }
}

/// Query point as received in a URL query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListSchoolsQuery {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

impl From<ListSchoolsQuery> for ListSchoolsRequest {
    fn from(query: ListSchoolsQuery) -> Self {
        Self {
            latitude: query.latitude.map(Value::String),
            longitude: query.longitude.map(Value::String),
        }
    }
}

/// One entry of a ranked listing: the stored record plus a `"N km"` label.
#[derive(Debug, Clone, Serialize)]
pub struct RankedSchoolDto {
    #[serde(flatten)]
    pub school: School,
    pub distance: String,
}

impl From<RankedSchool> for RankedSchoolDto {
    fn from(ranked: RankedSchool) -> Self {
        let distance = ranked.distance_label();
        Self {
            school: ranked.school,
            distance,
        }
    }
}
