//! Conversion panel state and the swap attempt lifecycle.
//!
//! A [`ConversionEngine`] owns the mode, direction, derived token pair and the
//! amount typed by the user. Quotes are pure reads over that state; a swap
//! attempt moves the phase through `Idle -> InFlight -> Settled | Failed` and
//! always lands back on `Idle`.
use crate::core::error::ConversionError;
use crate::core::rates::{self, ConversionResult, RateTable};
use crate::core::settlement::SettlementProvider;
use crate::core::token::{ConversionMode, Direction, TokenPair, select_pair};
use crate::core::wallet::WalletConnection;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt::Display;
use tokio::sync::watch;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SwapPhase {
    Idle,
    InFlight,
    Settled,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionRequest {
    pub pair: TokenPair,
    pub amount: String,
}

/// Outcome of a settled swap.
#[derive(Debug, Clone, Serialize)]
pub struct SwapReceipt {
    pub pair: TokenPair,
    /// Amount exactly as the user typed it.
    pub amount_text: String,
    pub amount_in: Decimal,
    pub estimated_output: Decimal,
    pub rate: Decimal,
    pub settled_at: DateTime<Utc>,
}

impl Display for SwapReceipt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Successfully swapped {} {} to {} {}",
            self.amount_text, self.pair.from, self.estimated_output, self.pair.to
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonState {
    pub enabled: bool,
    pub label: String,
}

/// Publishes `InFlight` on entry and `Idle` when dropped, whatever the exit path.
struct PhaseGuard<'a> {
    phase: &'a watch::Sender<SwapPhase>,
}

impl<'a> PhaseGuard<'a> {
    fn enter(phase: &'a watch::Sender<SwapPhase>) -> Self {
        phase.send_replace(SwapPhase::InFlight);
        Self { phase }
    }

    fn finish(&self, outcome: SwapPhase) {
        self.phase.send_replace(outcome);
    }
}

impl Drop for PhaseGuard<'_> {
    fn drop(&mut self) {
        self.phase.send_replace(SwapPhase::Idle);
    }
}

pub struct ConversionEngine {
    mode: ConversionMode,
    direction: Direction,
    pair: TokenPair,
    amount: String,
    phase: watch::Sender<SwapPhase>,
    settlement: Box<dyn SettlementProvider>,
}

impl ConversionEngine {
    pub fn new(
        mode: ConversionMode,
        direction: Direction,
        settlement: Box<dyn SettlementProvider>,
    ) -> Self {
        let (phase, _) = watch::channel(SwapPhase::Idle);
        Self {
            mode,
            direction,
            pair: select_pair(mode, direction),
            amount: String::new(),
            phase,
            settlement,
        }
    }

    pub fn mode(&self) -> ConversionMode {
        self.mode
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pair(&self) -> TokenPair {
        self.pair
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn phase(&self) -> SwapPhase {
        *self.phase.borrow()
    }

    /// Receiver that observes phase changes, including while a swap is pending.
    pub fn subscribe(&self) -> watch::Receiver<SwapPhase> {
        self.phase.subscribe()
    }

    pub fn set_mode(&mut self, mode: ConversionMode) {
        self.mode = mode;
        self.rederive_pair();
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
        self.rederive_pair();
    }

    pub fn set_amount(&mut self, amount: impl Into<String>) {
        self.amount = amount.into();
    }

    fn rederive_pair(&mut self) {
        self.pair = select_pair(self.mode, self.direction);
        debug!(
            mode = %self.mode,
            direction = %self.direction,
            pair = %self.pair,
            "Derived token pair"
        );
    }

    pub fn rate(&self) -> Decimal {
        RateTable::for_mode(self.mode).rate(&self.pair)
    }

    pub fn quote(&self) -> ConversionResult {
        let rate = self.rate();
        ConversionResult {
            estimated_output: rates::estimate(&self.amount, rate),
            rate,
        }
    }

    /// Human readable rate, e.g. `1 BTC = 1 LBTC`.
    pub fn rate_display(&self) -> String {
        format!("1 {} = {} {}", self.pair.from, self.rate(), self.pair.to)
    }

    pub fn request(&self) -> ConversionRequest {
        ConversionRequest {
            pair: self.pair,
            amount: self.amount.clone(),
        }
    }

    pub fn button_state(&self, wallet: &WalletConnection) -> ButtonState {
        let operation = self.direction.operation();
        let in_flight = self.phase() == SwapPhase::InFlight;
        let connected = wallet.is_connected();

        let label = if in_flight {
            format!("{operation}...")
        } else if connected {
            operation.to_string()
        } else {
            format!("Connect Wallet to {operation}")
        };

        ButtonState {
            enabled: !self.amount.is_empty() && connected && !in_flight,
            label,
        }
    }

    /// Runs one swap attempt against the settlement provider.
    ///
    /// The amount is cleared only when settlement succeeds.
    pub async fn execute_conversion(
        &mut self,
        wallet: &WalletConnection,
    ) -> Result<SwapReceipt, ConversionError> {
        if !wallet.is_connected() {
            warn!("Swap requested without a connected wallet");
            return Err(ConversionError::WalletNotConnected);
        }

        let request = self.request();
        let quote = self.quote();
        let amount_in = rates::parse_amount(&request.amount).unwrap_or(Decimal::ZERO);

        let guard = PhaseGuard::enter(&self.phase);
        info!(
            "Swapping {} {} for approximately {} {}",
            amount_in, request.pair.from, quote.estimated_output, request.pair.to
        );

        match self
            .settlement
            .submit_swap(request.pair.from, request.pair.to, amount_in)
            .await
        {
            Ok(()) => {
                guard.finish(SwapPhase::Settled);
                self.amount.clear();
                let receipt = SwapReceipt {
                    pair: request.pair,
                    amount_text: request.amount,
                    amount_in,
                    estimated_output: quote.estimated_output,
                    rate: quote.rate,
                    settled_at: Utc::now(),
                };
                info!("{receipt}");
                Ok(receipt)
            }
            Err(e) => {
                guard.finish(SwapPhase::Failed);
                warn!("Swap failed: {e:?}");
                Err(ConversionError::swap_failed(e))
            }
        }
    }
}
