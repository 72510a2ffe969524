//! Core conversion and dashboard logic

pub mod config;
pub mod conversion;
pub mod dashboard;
pub mod error;
pub mod log;
pub mod rates;
pub mod settlement;
pub mod token;
pub mod wallet;

// Re-export main types for cleaner imports
pub use conversion::{ConversionEngine, SwapPhase, SwapReceipt};
pub use error::ConversionError;
pub use settlement::SettlementProvider;
pub use token::{ConversionMode, Direction, Token, TokenPair, select_pair};
pub use wallet::WalletConnection;
