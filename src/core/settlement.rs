//! Settlement abstractions

use crate::core::token::Token;
use anyhow::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Submits a swap to whatever system settles it.
#[async_trait]
pub trait SettlementProvider: Send + Sync {
    async fn submit_swap(&self, from: Token, to: Token, amount: Decimal) -> Result<()>;
}
