use super::ui;
use crate::core::conversion::ConversionEngine;
use crate::core::wallet::WalletConnection;
use comfy_table::{Cell, CellAlignment};

/// Renders the panel for the engine's current selection.
pub fn render(engine: &ConversionEngine, wallet: &WalletConnection) -> String {
    let pair = engine.pair();
    let quote = engine.quote();
    let button = engine.button_state(wallet);

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("From"),
        ui::header_cell("Amount"),
        ui::header_cell("To"),
        ui::header_cell("Estimated"),
    ]);

    let amount = if engine.amount().is_empty() {
        "0.0"
    } else {
        engine.amount()
    };
    table.add_row(vec![
        Cell::new(pair.from),
        Cell::new(amount).set_alignment(CellAlignment::Right),
        Cell::new(pair.to),
        Cell::new(quote.estimated_output).set_alignment(CellAlignment::Right),
    ]);

    let button_style = if button.enabled {
        ui::StyleType::TotalValue
    } else {
        ui::StyleType::Subtle
    };

    format!(
        "{} ({})\n\n{table}\n\nRate: {}\n\n[ {} ]",
        ui::style_text(engine.direction().operation(), ui::StyleType::Title),
        engine.mode(),
        engine.rate_display(),
        ui::style_text(&button.label, button_style),
    )
}

pub fn run(engine: &ConversionEngine, wallet: &WalletConnection) {
    println!("{}", render(engine, wallet));
}
