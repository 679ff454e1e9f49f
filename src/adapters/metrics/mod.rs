//! Metrics and Monitoring Adapters
//!
//! Provides Prometheus counters on `/metrics` and health check
//! endpoints (`/live`, `/ready`), mounted on the main router.

pub mod health;
pub mod prometheus;

pub use self::prometheus::MetricsRegistry;
