//! Portfolio aggregation over a flat collection of assets.

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::Serialize;

use super::asset::Asset;

/// Dashboard totals: how many holdings and what they are worth together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_assets: usize,
    #[serde(serialize_with = "rust_decimal::serde::arbitrary_precision::serialize")]
    pub portfolio_value: Decimal,
}

impl PortfolioSummary {
    /// Sum `total_value()` across every asset.
    ///
    /// Fails, naming the offending holding, when a product or the running
    /// sum leaves `Decimal` range. Storage accepts any amounts, so this
    /// is reachable with valid rows.
    pub fn try_from_assets(assets: &[Asset]) -> Result<Self> {
        let mut portfolio_value = Decimal::ZERO;
        for asset in assets {
            let value = asset.checked_total_value().with_context(|| {
                format!("Value of asset {} ({}) overflows", asset.id, asset.symbol)
            })?;
            portfolio_value = portfolio_value
                .checked_add(value)
                .with_context(|| format!("Portfolio value overflows at asset {}", asset.id))?;
        }

        Ok(Self {
            total_assets: assets.len(),
            portfolio_value,
        })
    }
}
