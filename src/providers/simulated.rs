use crate::core::settlement::SettlementProvider;
use crate::core::token::Token;
use anyhow::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::time::Duration;
use tracing::debug;

/// Stand-in settlement that waits a fixed latency and always succeeds.
#[derive(Debug, Clone)]
pub struct SimulatedSettlement {
    latency: Duration,
}

impl SimulatedSettlement {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn from_millis(latency_ms: u64) -> Self {
        Self::new(Duration::from_millis(latency_ms))
    }
}

impl Default for SimulatedSettlement {
    fn default() -> Self {
        Self::from_millis(1000)
    }
}

#[async_trait]
impl SettlementProvider for SimulatedSettlement {
    async fn submit_swap(&self, from: Token, to: Token, amount: Decimal) -> Result<()> {
        debug!(
            "Simulating settlement of {} {} -> {} ({:?})",
            amount, from, to, self.latency
        );
        tokio::time::sleep(self.latency).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_simulated_settlement_waits_latency() {
        let provider = SimulatedSettlement::from_millis(30);
        let start = Instant::now();

        let result = provider
            .submit_swap(Token::Btc, Token::Lbtc, Decimal::ONE)
            .await;

        assert!(result.is_ok());
        assert!(start.elapsed() >= Duration::from_millis(30));
    }

    #[test]
    fn test_default_latency() {
        assert_eq!(SimulatedSettlement::default().latency, Duration::from_secs(1));
    }
}
