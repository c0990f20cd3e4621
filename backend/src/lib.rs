//! # School Locator Backend
//!
//! A small registry of schools with proximity search.
//!
//! Clients register schools (name, address and geographic coordinates) and
//! ask for every registered school ordered by great-circle distance from a
//! point of their choosing. The backend exposes a REST API via Axum.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`algorithms`]: Haversine distance and kilometre rounding
//! - [`api`]: Wire types of the HTTP API
//! - [`db`]: Repository pattern and persistence layer
//! - [`models`]: Domain records
//! - [`routes`]: Route paths and request/response payloads
//! - [`services`]: Validation, ranking and orchestration
//! - [`http`]: Axum-based HTTP server and request handlers

// Allow large error types - RepositoryError contains rich context for debugging
#![allow(clippy::result_large_err)]

pub mod algorithms;
pub mod api;

pub mod db;
pub mod models;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
