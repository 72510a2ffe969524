//! Token, mode and direction types for the conversion panel

use crate::core::error::ConversionError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Token {
    #[serde(rename = "BTC")]
    Btc,
    #[serde(rename = "LBTC")]
    Lbtc,
    #[serde(rename = "LUSD")]
    Lusd,
    #[serde(rename = "sLUSD")]
    SLusd,
}

impl Token {
    pub fn symbol(&self) -> &'static str {
        match self {
            Token::Btc => "BTC",
            Token::Lbtc => "LBTC",
            Token::Lusd => "LUSD",
            Token::SLusd => "sLUSD",
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Token {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BTC" => Ok(Token::Btc),
            "LBTC" => Ok(Token::Lbtc),
            "LUSD" => Ok(Token::Lusd),
            "sLUSD" | "SLUSD" => Ok(Token::SLusd),
            _ => Err(anyhow::anyhow!("Unknown token: {}", s)),
        }
    }
}

/// Asset family a conversion panel operates on.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ConversionMode {
    #[default]
    Btc,
    Lusd,
}

impl ConversionMode {
    pub const ALL: [ConversionMode; 2] = [ConversionMode::Btc, ConversionMode::Lusd];
}

impl Display for ConversionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ConversionMode::Btc => "btc",
                ConversionMode::Lusd => "lusd",
            }
        )
    }
}

impl FromStr for ConversionMode {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "btc" => Ok(ConversionMode::Btc),
            "lusd" => Ok(ConversionMode::Lusd),
            _ => Err(ConversionError::InvalidMode(s.to_string())),
        }
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Stake,
    Unstake,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Stake, Direction::Unstake];

    /// Verb shown on the panel's action button.
    pub fn operation(&self) -> &'static str {
        match self {
            Direction::Stake => "Stake",
            Direction::Unstake => "Unstake",
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Direction::Stake => "stake",
                Direction::Unstake => "unstake",
            }
        )
    }
}

impl FromStr for Direction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stake" => Ok(Direction::Stake),
            "unstake" => Ok(Direction::Unstake),
            _ => Err(anyhow::anyhow!("Invalid direction: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenPair {
    pub from: Token,
    pub to: Token,
}

impl TokenPair {
    pub fn new(from: Token, to: Token) -> Self {
        Self { from, to }
    }

    /// Rate table key, e.g. `BTC-LBTC`.
    pub fn key(&self) -> String {
        format!("{}-{}", self.from, self.to)
    }
}

impl Display for TokenPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

impl FromStr for TokenPair {
    type Err = anyhow::Error;

    /// Parses a rate table key such as `LUSD-sLUSD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (from, to) = s
            .split_once('-')
            .ok_or_else(|| anyhow::anyhow!("Invalid token pair (expected FROM-TO): {}", s))?;
        Ok(TokenPair::new(from.trim().parse()?, to.trim().parse()?))
    }
}

/// Resolves the active token pair for a mode and direction.
pub fn select_pair(mode: ConversionMode, direction: Direction) -> TokenPair {
    match (mode, direction) {
        (ConversionMode::Btc, Direction::Stake) => TokenPair::new(Token::Btc, Token::Lbtc),
        (ConversionMode::Btc, Direction::Unstake) => TokenPair::new(Token::Lbtc, Token::Btc),
        (ConversionMode::Lusd, Direction::Stake) => TokenPair::new(Token::Lusd, Token::SLusd),
        (ConversionMode::Lusd, Direction::Unstake) => TokenPair::new(Token::SLusd, Token::Lusd),
    }
}
