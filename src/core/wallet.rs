use serde::{Deserialize, Serialize};

/// Wallet connection state supplied by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletConnection {
    pub account: Option<String>,
}

impl WalletConnection {
    pub fn connected(account: impl Into<String>) -> Self {
        Self {
            account: Some(account.into()),
        }
    }

    pub fn disconnected() -> Self {
        Self { account: None }
    }

    pub fn is_connected(&self) -> bool {
        self.account.as_deref().is_some_and(|a| !a.trim().is_empty())
    }

    /// Shortened account id for display, e.g. `0x12ab…cdef`.
    pub fn display_account(&self) -> Option<String> {
        let account = self.account.as_deref()?.trim();
        if account.is_empty() {
            return None;
        }
        let chars: Vec<char> = account.chars().collect();
        if chars.len() <= 12 {
            return Some(account.to_string());
        }
        let head: String = chars[..6].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        Some(format!("{head}…{tail}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_state() {
        assert!(WalletConnection::connected("abc").is_connected());
        assert!(!WalletConnection::disconnected().is_connected());
        assert!(!WalletConnection::connected("  ").is_connected());
    }

    #[test]
    fn test_display_account() {
        let wallet = WalletConnection::connected("0x1234567890abcdef");
        assert_eq!(wallet.display_account().as_deref(), Some("0x1234…cdef"));
        assert_eq!(
            WalletConnection::connected("short").display_account().as_deref(),
            Some("short")
        );
        assert!(WalletConnection::disconnected().display_account().is_none());
    }
}
