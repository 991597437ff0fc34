//! Status endpoint service for the ML pipeline.
//!
//! The service owns a single long-lived handle to a Redis key-value store
//! and exposes two read-only HTTP endpoints:
//!
//! ```text
//! GET /        -> {"message": "ML Service is running"}
//! GET /health  -> {"status": "ok", "redis": "connected" | "disconnected"}
//! ```
//!
//! The health endpoint issues a fresh liveness probe on every request. A
//! probe failure is degraded into the `redis` field of the report rather
//! than failing the request: the endpoint answers 200 whether or not the
//! store is reachable, and callers inspect the body.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`store`]: Store handle and liveness probe
//! - [`api`]: HTTP API surface
//! - [`metrics`]: Probe metrics recording
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod store;
pub mod utils;

pub use config::Config;
pub use error::{Result, ServiceError};
