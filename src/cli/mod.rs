pub mod convert;
pub mod dashboard;
pub mod quote;
pub mod rates;
pub mod setup;
pub mod ui;

use crate::core::error::ConversionError;

/// Message to show the user for a failed command, if any.
///
/// Invalid modes are configuration errors and only go to the log.
pub fn error_message(err: &anyhow::Error) -> Option<String> {
    match err.downcast_ref::<ConversionError>() {
        Some(ConversionError::InvalidMode(_)) => None,
        Some(e) => Some(e.to_string()),
        None => Some(format!("Error: {err:#}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_for_conversion_failures() {
        let err = anyhow::Error::from(ConversionError::WalletNotConnected);
        assert_eq!(
            error_message(&err).as_deref(),
            Some("Please connect your wallet first")
        );

        let err = anyhow::Error::from(ConversionError::swap_failed(anyhow::anyhow!("timeout")));
        assert_eq!(error_message(&err).as_deref(), Some("Swap failed: timeout"));
    }

    #[test]
    fn test_invalid_mode_is_not_shown() {
        let err = anyhow::Error::from(ConversionError::InvalidMode("eth".to_string()));
        assert!(error_message(&err).is_none());
    }

    #[test]
    fn test_other_errors_keep_context() {
        let err = anyhow::anyhow!("permission denied").context("Failed to read config file: x");
        assert_eq!(
            error_message(&err).as_deref(),
            Some("Error: Failed to read config file: x: permission denied")
        );
    }
}
