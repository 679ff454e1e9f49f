//! Use Cases Layer - Application Business Logic
//!
//! Orchestrates domain logic with port interfaces to implement
//! the service's request flows.
//!
//! Use cases:
//! - `PortfolioService`: list assets, create an asset, portfolio summary

pub mod portfolio;

pub use portfolio::PortfolioService;
