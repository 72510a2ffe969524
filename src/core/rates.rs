//! Static rate tables and output estimation.
use crate::core::token::{ConversionMode, Token, TokenPair};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::collections::BTreeMap;
use std::str::FromStr;
use tracing::debug;

/// Fractional digits of every estimated output.
pub const ESTIMATE_SCALE: u32 = 6;

/// Mapping of `FROM-TO` keys to conversion multipliers for one mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateTable {
    rates: BTreeMap<String, Decimal>,
}

impl RateTable {
    pub fn for_mode(mode: ConversionMode) -> Self {
        let pairs = match mode {
            ConversionMode::Btc => [
                (TokenPair::new(Token::Btc, Token::Lbtc), Decimal::ONE),
                (TokenPair::new(Token::Lbtc, Token::Btc), Decimal::ONE),
            ],
            ConversionMode::Lusd => [
                (TokenPair::new(Token::Lusd, Token::SLusd), Decimal::ONE),
                (TokenPair::new(Token::SLusd, Token::Lusd), Decimal::ONE),
            ],
        };
        Self {
            rates: pairs
                .into_iter()
                .map(|(pair, rate)| (pair.key(), rate))
                .collect(),
        }
    }

    /// Rate for `pair`, or zero when the table has no path for it.
    pub fn rate(&self, pair: &TokenPair) -> Decimal {
        self.rates.get(&pair.key()).copied().unwrap_or(Decimal::ZERO)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.rates.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

pub fn rate_of(mode: ConversionMode, from: Token, to: Token) -> Decimal {
    RateTable::for_mode(mode).rate(&TokenPair::new(from, to))
}

/// Parses a user-typed amount. Returns `None` for empty or malformed text.
pub fn parse_amount(input: &str) -> Option<Decimal> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

/// Estimated output for `input` at `rate`, fixed to six fractional digits.
///
/// Unparsable input counts as zero.
pub fn estimate(input: &str, rate: Decimal) -> Decimal {
    let amount = parse_amount(input).unwrap_or_else(|| {
        if !input.is_empty() {
            debug!("Treating unparsable amount {:?} as zero", input);
        }
        Decimal::ZERO
    });

    let mut output = amount
        .checked_mul(rate)
        .unwrap_or_else(|| {
            debug!("Estimate overflowed for {} x {}, using zero", amount, rate);
            Decimal::ZERO
        })
        .round_dp_with_strategy(ESTIMATE_SCALE, RoundingStrategy::MidpointAwayFromZero);
    output.rescale(ESTIMATE_SCALE);
    if output.scale() != ESTIMATE_SCALE {
        debug!("Estimate {} has no room for {} digits, using zero", output, ESTIMATE_SCALE);
        output = Decimal::ZERO;
        output.rescale(ESTIMATE_SCALE);
    }
    output
}

/// Result of quoting the current amount against the active pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionResult {
    pub estimated_output: Decimal,
    pub rate: Decimal,
}
