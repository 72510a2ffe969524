//! Derives the dashboard view from the wallet connection state.
//!
//! The values are fixed demo figures until balances come from a real source.
//! Every call recomputes the snapshot; nothing is cached.
use serde::Serialize;

/// Shown in place of any value while no wallet is connected.
pub const PLACEHOLDER: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetSnapshot {
    pub symbol: String,
    pub value: String,
    pub change: String,
    pub is_positive: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dollar_value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YieldSnapshot {
    pub total_yield: String,
    #[serde(rename = "currentAPY")]
    pub current_apy: String,
    pub change_from_last_month: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VaultAllocation {
    pub name: String,
    pub percentage: u8,
    pub apy: String,
    pub amount: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub is_connected: bool,
    pub assets: Vec<AssetSnapshot>,
    #[serde(rename = "yield")]
    pub yields: YieldSnapshot,
    pub vaults: Vec<VaultAllocation>,
}

impl DashboardSnapshot {
    pub fn asset(&self, symbol: &str) -> Option<&AssetSnapshot> {
        self.assets.iter().find(|a| a.symbol == symbol)
    }

    pub fn vault(&self, name: &str) -> Option<&VaultAllocation> {
        self.vaults.iter().find(|v| v.name == name)
    }

    pub fn total_allocation(&self) -> u32 {
        self.vaults.iter().map(|v| u32::from(v.percentage)).sum()
    }
}

fn pick(connected: bool, value: &str) -> String {
    let shown = if connected { value } else { PLACEHOLDER };
    shown.to_string()
}

fn asset(
    connected: bool,
    symbol: &str,
    value: &str,
    change: &str,
    dollar: Option<&str>,
) -> AssetSnapshot {
    AssetSnapshot {
        symbol: symbol.to_string(),
        value: pick(connected, value),
        change: pick(connected, change),
        is_positive: true,
        dollar_value: dollar.filter(|_| connected).map(str::to_string),
    }
}

fn vault(
    connected: bool,
    name: &str,
    percentage: u8,
    apy: &str,
    amount: &str,
    color: &str,
) -> VaultAllocation {
    VaultAllocation {
        name: name.to_string(),
        percentage: if connected { percentage } else { 0 },
        apy: pick(connected, apy),
        amount: pick(connected, amount),
        color: color.to_string(),
    }
}

pub fn snapshot(connected: bool) -> DashboardSnapshot {
    DashboardSnapshot {
        is_connected: connected,
        assets: vec![
            asset(connected, "LBTC", "1.25 BTC", "0.05 BTC (4.2%)", Some("$104,319")),
            asset(connected, "LUSD", "$15,750", "$750 (5.0%)", None),
            asset(connected, "sLUSD", "$8,320", "$320 (4.0%)", None),
        ],
        yields: YieldSnapshot {
            total_yield: pick(connected, "$1,245.65"),
            current_apy: pick(connected, "15.2%"),
            change_from_last_month: pick(connected, "+2.3% from last month"),
        },
        vaults: vec![
            vault(connected, "drift", 45, "16.8%", "$3,741", "#4DA2FF"),
            vault(connected, "kamino", 35, "14.5%", "$2,912", "#63C9B9"),
            vault(connected, "LUSDPool", 20, "12.3%", "$1,664", "#2E5A5A"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disconnected_snapshot_is_all_placeholders() {
        let snap = snapshot(false);
        assert!(!snap.is_connected);

        for asset in &snap.assets {
            assert_eq!(asset.value, PLACEHOLDER);
            assert_eq!(asset.change, PLACEHOLDER);
            assert!(asset.dollar_value.is_none());
        }
        assert_eq!(snap.yields.total_yield, PLACEHOLDER);
        assert_eq!(snap.yields.current_apy, PLACEHOLDER);
        assert_eq!(snap.yields.change_from_last_month, PLACEHOLDER);
        for vault in &snap.vaults {
            assert_eq!(vault.percentage, 0);
            assert_eq!(vault.apy, PLACEHOLDER);
            assert_eq!(vault.amount, PLACEHOLDER);
        }
        assert_eq!(snap.total_allocation(), 0);
        assert_eq!(snap.vault("drift").unwrap().color, "#4DA2FF");
    }

    #[test]
    fn test_connected_snapshot_values() {
        let snap = snapshot(true);
        assert!(snap.is_connected);

        let lbtc = snap.asset("LBTC").unwrap();
        assert_eq!(lbtc.value, "1.25 BTC");
        assert_eq!(lbtc.change, "0.05 BTC (4.2%)");
        assert_eq!(lbtc.dollar_value.as_deref(), Some("$104,319"));
        assert_eq!(snap.asset("LUSD").unwrap().value, "$15,750");
        assert_eq!(snap.asset("sLUSD").unwrap().change, "$320 (4.0%)");
        assert!(snap.asset("sLUSD").unwrap().dollar_value.is_none());

        assert_eq!(snap.yields.total_yield, "$1,245.65");
        assert_eq!(snap.yields.current_apy, "15.2%");

        assert_eq!(snap.vault("drift").unwrap().percentage, 45);
        assert_eq!(snap.vault("kamino").unwrap().apy, "14.5%");
        assert_eq!(snap.vault("LUSDPool").unwrap().amount, "$1,664");
        assert_eq!(snap.total_allocation(), 100);
    }

    #[test]
    fn test_snapshot_is_idempotent() {
        assert_eq!(snapshot(false), snapshot(false));
        assert_eq!(snapshot(true), snapshot(true));
        assert_ne!(snapshot(true), snapshot(false));
    }

    #[test]
    fn test_snapshot_json_shape() {
        let json = serde_json::to_value(snapshot(true)).unwrap();
        assert_eq!(json["isConnected"], true);
        assert_eq!(json["yield"]["currentAPY"], "15.2%");
        assert_eq!(json["assets"][0]["dollarValue"], "$104,319");
        assert_eq!(json["vaults"][2]["name"], "LUSDPool");

        let json = serde_json::to_value(snapshot(false)).unwrap();
        assert!(json["assets"][0].get("dollarValue").is_none());
    }
}
