//! Weather-aware outfit recommendation service.
//!
//! The decision table lives in [`services::outfit`]; everything else wires it
//! to a weather provider, an in-memory history and an HTTP API.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
