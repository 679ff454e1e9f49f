//! Domain layer - Core business model.
//!
//! Pure types and computations for the portfolio ledger.
//! No I/O here (hexagonal architecture inner ring).

pub mod asset;
pub mod portfolio;

pub use asset::{Asset, AssetId, DEFAULT_ASSET_TYPE, NewAsset, TrackedAsset};
pub use portfolio::PortfolioSummary;
