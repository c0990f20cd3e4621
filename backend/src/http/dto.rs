//! Data Transfer Objects for the HTTP API.
//!
//! The school payloads live in the routes module; this adds the HTTP-only ones.

use serde::{Deserialize, Serialize};

pub use crate::api::{
    CreateSchoolRequest, CreateSchoolResponse, ListSchoolsQuery, ListSchoolsRequest,
    RankedSchoolDto,
};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Server status
    pub status: String,
    /// Crate version
    pub version: String,
    /// Database connection status
    pub database: String,
}
