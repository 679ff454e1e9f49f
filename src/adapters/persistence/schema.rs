//! Schema Bootstrap - Initial `Assets` Table
//!
//! Idempotent: safe to run on every startup.

use anyhow::{Context, Result};
use sqlx::PgPool;
use tracing::{info, instrument};

/// DDL for the single asset table. Identity column supplies `Id`.
pub const CREATE_ASSETS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS "Assets" (
    "Id" integer GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY,
    "Symbol" text NOT NULL,
    "Name" text NOT NULL,
    "Quantity" numeric NOT NULL,
    "PricePerShare" numeric NOT NULL,
    "Type" text NOT NULL
)
"#;

/// Create the `Assets` table if it does not exist.
#[instrument(skip(pool))]
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(CREATE_ASSETS_TABLE)
        .execute(pool)
        .await
        .context("Failed to create Assets table")?;

    info!("Assets schema ready");
    Ok(())
}
