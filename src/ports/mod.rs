//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces (traits) that the use cases require from the
//! outside world. Adapters implement these traits.
//!
//! Port categories:
//! - `AssetRepository`: asset storage (PostgreSQL or in-memory)
//! - `RepositoryProvider`: per-request repository factory

pub mod repository;

pub use repository::{AssetRepository, RepositoryProvider};
