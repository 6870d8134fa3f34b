//! # API Shared
//!
//! Shared definitions for the vitals APIs.
//!
//! Contains:
//! - Wire types (`wire` module) with serde and OpenAPI schemas
//! - Shared services like `HealthService`
//!
//! Used by `api-rest`; core types stay free of transport concerns.

pub mod health;
pub mod wire;

pub use health::HealthService;
pub use wire::*;
