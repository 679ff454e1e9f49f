//! Persistence Adapters - Asset Storage
//!
//! Implements the repository port against PostgreSQL (production)
//! and a process-local table (development and tests).

pub mod memory;
pub mod postgres;
pub mod schema;

pub use memory::{InMemoryAssetRepository, InMemoryProvider};
pub use postgres::{PgAssetRepository, PgProvider};
pub use schema::ensure_schema;
