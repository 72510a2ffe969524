use super::ui;
use crate::core::rates::{self, RateTable};
use crate::core::token::{ConversionMode, TokenPair};
use comfy_table::{Cell, CellAlignment};

pub fn render(modes: &[ConversionMode]) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Mode"),
        ui::header_cell("Pair"),
        ui::header_cell("Rate"),
    ]);

    for mode in modes {
        for (key, rate) in RateTable::for_mode(*mode).iter() {
            table.add_row(vec![
                Cell::new(mode),
                Cell::new(key),
                Cell::new(rate).set_alignment(CellAlignment::Right),
            ]);
        }
    }

    format!(
        "{}\n\n{table}\n{}",
        ui::style_text("Conversion Rates", ui::StyleType::Title),
        ui::style_text("Pairs not listed have no conversion path.", ui::StyleType::Subtle)
    )
}

/// Looks up one pair in each mode's table; a zero rate means no path.
pub fn render_pair(modes: &[ConversionMode], pair: &TokenPair) -> String {
    modes
        .iter()
        .map(|mode| {
            let rate = rates::rate_of(*mode, pair.from, pair.to);
            if rate.is_zero() {
                let note = format!("no conversion path for {}", pair.key());
                format!("{mode}: {}", ui::style_text(&note, ui::StyleType::Subtle))
            } else {
                format!("{mode}: 1 {} = {} {}", pair.from, rate, pair.to)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn run(mode: Option<ConversionMode>, pair: Option<&TokenPair>) {
    let modes = match mode {
        Some(m) => vec![m],
        None => ConversionMode::ALL.to_vec(),
    };
    match pair {
        Some(pair) => println!("{}", render_pair(&modes, pair)),
        None => println!("{}", render(&modes)),
    }
}
