//! Request/response bodies for the JSON API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::NewAsset;

/// Body of `POST /api/assets`.
///
/// `symbol`, `name`, `quantity` and `pricePerShare` must be present
/// with the right JSON types; `type` may be omitted or null. Amounts
/// are read from the number's source digits, never through `f64`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssetRequest {
    pub symbol: String,
    pub name: String,
    #[serde(deserialize_with = "rust_decimal::serde::arbitrary_precision::deserialize")]
    pub quantity: Decimal,
    #[serde(deserialize_with = "rust_decimal::serde::arbitrary_precision::deserialize")]
    pub price_per_share: Decimal,
    #[serde(rename = "type", default)]
    pub asset_type: Option<String>,
}

impl CreateAssetRequest {
    pub fn into_draft(self) -> NewAsset {
        NewAsset::new(
            self.symbol,
            self.name,
            self.quantity,
            self.price_per_share,
            self.asset_type,
        )
    }
}

/// Uniform error body: `{ "error": ..., "message": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
    pub message: String,
}

impl ErrorEnvelope {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parses_camel_case_body() {
        let body = r#"{"symbol":"QQQ","name":"Invesco QQQ","quantity":10,"pricePerShare":400.5,"type":"ETF"}"#;
        let request: CreateAssetRequest = serde_json::from_str(body).unwrap();
        let draft = request.into_draft();
        assert_eq!(draft.quantity, dec!(10));
        assert_eq!(draft.price_per_share, dec!(400.5));
        assert_eq!(draft.asset_type, "ETF");
    }

    #[test]
    fn test_type_is_optional() {
        let body = r#"{"symbol":"VTI","name":"Vanguard","quantity":1,"pricePerShare":2,"type":null}"#;
        let request: CreateAssetRequest = serde_json::from_str(body).unwrap();
        assert_eq!(request.into_draft().asset_type, "ETF");
    }

    #[test]
    fn test_amounts_keep_every_digit() {
        let body = r#"{"symbol":"X","name":"X","quantity":12345678901234567890,"pricePerShare":123456789.123456789}"#;
        let draft = serde_json::from_str::<CreateAssetRequest>(body).unwrap().into_draft();
        assert_eq!(draft.quantity, dec!(12345678901234567890));
        assert_eq!(draft.price_per_share, dec!(123456789.123456789));
    }

    #[test]
    fn test_missing_symbol_is_rejected() {
        let body = r#"{"name":"Vanguard","quantity":1,"pricePerShare":2}"#;
        assert!(serde_json::from_str::<CreateAssetRequest>(body).is_err());
    }
}
