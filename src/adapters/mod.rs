//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements the port traits defined in `crate::ports` with concrete
//! external dependencies and exposes the use cases to the outside.
//! Each sub-module groups adapters by infrastructure concern.
//!
//! Adapter categories:
//! - `http`: JSON API, fault boundary, static front-end hosting
//! - `metrics`: Prometheus counters and health checks
//! - `persistence`: PostgreSQL and in-memory asset storage

pub mod http;
pub mod metrics;
pub mod persistence;
