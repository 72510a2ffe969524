use super::{quote, ui};
use crate::core::conversion::{ConversionEngine, SwapPhase, SwapReceipt};
use crate::core::wallet::WalletConnection;
use anyhow::Result;
use comfy_table::Cell;

fn render_receipt(receipt: &SwapReceipt) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Sent"),
        ui::header_cell("Received"),
        ui::header_cell("Rate"),
        ui::header_cell("Settled At"),
    ]);
    table.add_row(vec![
        Cell::new(format!("{} {}", receipt.amount_in, receipt.pair.from)),
        Cell::new(format!("{} {}", receipt.estimated_output, receipt.pair.to)),
        Cell::new(receipt.rate),
        Cell::new(receipt.settled_at.format("%Y-%m-%d %H:%M:%S UTC")),
    ]);

    format!(
        "{}\n\n{table}",
        ui::style_text(&receipt.to_string(), ui::StyleType::Success)
    )
}

/// Executes the engine's pending conversion, showing a spinner while it settles.
pub async fn run(engine: &mut ConversionEngine, wallet: &WalletConnection) -> Result<SwapReceipt> {
    println!("{}", quote::render(engine, wallet));

    let in_flight_label = format!("{}...", engine.direction().operation());
    let mut phase = engine.subscribe();
    let pb = ui::new_spinner("Preparing swap");

    let result = {
        let attempt = engine.execute_conversion(wallet);
        tokio::pin!(attempt);
        loop {
            tokio::select! {
                res = &mut attempt => break res,
                changed = phase.changed() => {
                    if changed.is_err() {
                        break (&mut attempt).await;
                    }
                    if *phase.borrow_and_update() == SwapPhase::InFlight {
                        pb.set_message(in_flight_label.clone());
                    }
                }
            }
        }
    };
    pb.finish_and_clear();

    let receipt = result?;
    println!("\n{}", render_receipt(&receipt));
    Ok(receipt)
}
