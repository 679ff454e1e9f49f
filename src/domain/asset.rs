//! Asset entity - a single holding in the portfolio.
//!
//! Exposes two shapes:
//! - `NewAsset`: fields supplied by a caller, not yet persisted (no id)
//! - `Asset`: a persisted row carrying its storage-assigned identity
//!
//! `TrackedAsset` links the two across the stage → commit boundary.

use std::sync::{Arc, OnceLock};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Storage-assigned identity (the `integer` identity column).
pub type AssetId = i32;

/// Classification applied when a caller does not supply one.
pub const DEFAULT_ASSET_TYPE: &str = "ETF";

/// A persisted holding.
///
/// Serialized with camelCase keys; `asset_type` travels as `type`.
/// Decimals travel as JSON numbers carrying every digit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Identity assigned by storage on insert. Never changes.
    pub id: AssetId,
    /// Ticker, e.g. `QQQ`.
    pub symbol: String,
    /// Human-readable description.
    pub name: String,
    /// Units held. Negative values are accepted as-is.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub quantity: Decimal,
    /// Currency amount per unit.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price_per_share: Decimal,
    /// Stock, ETF, Crypto, REIT, ...
    #[serde(rename = "type")]
    pub asset_type: String,
}

impl Asset {
    /// Market value of the holding: `quantity * price_per_share`.
    ///
    /// Computed on demand, never stored.
    pub fn total_value(&self) -> Decimal {
        self.quantity * self.price_per_share
    }

    /// `total_value`, or `None` when the product leaves `Decimal` range.
    pub fn checked_total_value(&self) -> Option<Decimal> {
        self.quantity.checked_mul(self.price_per_share)
    }
}

/// A holding that has not been written to storage yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAsset {
    pub symbol: String,
    pub name: String,
    pub quantity: Decimal,
    pub price_per_share: Decimal,
    pub asset_type: String,
}

impl NewAsset {
    /// Build a draft. A missing classification falls back to `ETF`.
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        quantity: Decimal,
        price_per_share: Decimal,
        asset_type: Option<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            quantity,
            price_per_share,
            asset_type: asset_type.unwrap_or_else(|| DEFAULT_ASSET_TYPE.to_string()),
        }
    }

    /// Same computation as [`Asset::total_value`].
    pub fn total_value(&self) -> Decimal {
        self.quantity * self.price_per_share
    }

    /// Attach a storage-assigned identity.
    pub fn into_asset(self, id: AssetId) -> Asset {
        Asset {
            id,
            symbol: self.symbol,
            name: self.name,
            quantity: self.quantity,
            price_per_share: self.price_per_share,
            asset_type: self.asset_type,
        }
    }
}

/// Handle returned when a draft is staged on a repository.
///
/// Clones share one write-once identity slot: the repository keeps one
/// clone and fills the slot when the row is committed, the caller keeps
/// the other and reads the persisted asset back afterwards.
#[derive(Debug, Clone)]
pub struct TrackedAsset {
    draft: NewAsset,
    id: Arc<OnceLock<AssetId>>,
}

impl TrackedAsset {
    pub fn new(draft: NewAsset) -> Self {
        Self {
            draft,
            id: Arc::new(OnceLock::new()),
        }
    }

    /// The staged fields.
    pub fn draft(&self) -> &NewAsset {
        &self.draft
    }

    /// Identity, once committed.
    pub fn id(&self) -> Option<AssetId> {
        self.id.get().copied()
    }

    /// Record the identity storage assigned. Returns `false` if the
    /// slot was already filled (the first assignment wins).
    pub fn mark_persisted(&self, id: AssetId) -> bool {
        self.id.set(id).is_ok()
    }

    /// The full persisted asset, or `None` while still staged.
    pub fn persisted(&self) -> Option<Asset> {
        self.id().map(|id| self.draft.clone().into_asset(id))
    }
}
