use super::ui;
use crate::core::dashboard::{self, DashboardSnapshot};
use crate::core::wallet::WalletConnection;
use anyhow::{Context, Result};
use comfy_table::Cell;

impl DashboardSnapshot {
    pub fn display_as_tables(&self) -> String {
        let mut assets = ui::new_styled_table();
        assets.set_header(vec![
            ui::header_cell("Asset"),
            ui::header_cell("Balance"),
            ui::header_cell("Change"),
            ui::header_cell("USD Value"),
        ]);
        for asset in &self.assets {
            assets.add_row(vec![
                Cell::new(&asset.symbol),
                ui::value_cell(&asset.value),
                ui::change_cell(&asset.change, asset.is_positive),
                ui::value_cell(asset.dollar_value.as_deref().unwrap_or(dashboard::PLACEHOLDER)),
            ]);
        }

        let mut vaults = ui::new_styled_table();
        vaults.set_header(vec![
            ui::header_cell("Vault"),
            ui::header_cell("Allocation"),
            ui::header_cell(""),
            ui::header_cell("APY"),
            ui::header_cell("Amount"),
        ]);
        for vault in &self.vaults {
            let bar = Cell::new(ui::allocation_bar(vault.percentage, 20));
            let bar = match ui::hex_color(&vault.color) {
                Some(color) => bar.fg(color),
                None => bar,
            };
            vaults.add_row(vec![
                Cell::new(&vault.name),
                ui::value_cell(&format!("{}%", vault.percentage)),
                bar,
                ui::value_cell(&vault.apy),
                ui::value_cell(&vault.amount),
            ]);
        }

        format!(
            "{}\n\n{assets}\n\n{}\n  Total Yield: {}\n  Current APY: {}\n  {}\n\n{}\n\n{vaults}",
            ui::style_text("Assets", ui::StyleType::Title),
            ui::style_text("Yield", ui::StyleType::Title),
            ui::style_text(&self.yields.total_yield, ui::StyleType::TotalValue),
            ui::style_text(&self.yields.current_apy, ui::StyleType::TotalValue),
            ui::style_text(&self.yields.change_from_last_month, ui::StyleType::Subtle),
            ui::style_text("Vault Allocation", ui::StyleType::Title),
        )
    }
}

pub fn run(wallet: &WalletConnection, json: bool) -> Result<()> {
    let snapshot = dashboard::snapshot(wallet.is_connected());

    if json {
        let out = serde_json::to_string_pretty(&snapshot)
            .context("Failed to serialize dashboard snapshot")?;
        println!("{out}");
        return Ok(());
    }

    let account = wallet
        .display_account()
        .unwrap_or_else(|| "not connected".to_string());
    println!(
        "Wallet: {}\n",
        ui::style_text(&account, ui::StyleType::TotalLabel)
    );
    println!("{}", snapshot.display_as_tables());
    ui::print_separator();
    Ok(())
}
