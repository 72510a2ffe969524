//! Error types for conversion attempts

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Invalid conversion mode: {0}")]
    InvalidMode(String),

    #[error("Please connect your wallet first")]
    WalletNotConnected,

    #[error("Swap failed: {source}")]
    SwapExecution {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

impl ConversionError {
    pub fn swap_failed(cause: anyhow::Error) -> Self {
        ConversionError::SwapExecution {
            source: cause.into(),
        }
    }
}
