use super::format::{format_rate, format_timestamp};
use super::ui;
use crate::core::{ConversionError, RateFetcher, RateSet};
use chrono::{DateTime, Local, Utc};
use comfy_table::Cell;

pub fn display_rates(rates: &RateSet, timestamp: &DateTime<Utc>) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell("Currency"), ui::header_cell("Rate")]);
    for (currency, rate) in rates.iter() {
        table.add_row(vec![
            Cell::new(currency.code()),
            ui::amount_cell(format_rate(currency, rate)),
        ]);
    }

    format!(
        "{}\n\n{}\n\n{}",
        ui::style_text("Exchange rates", ui::StyleType::Title),
        table,
        ui::style_text(
            &format!(
                "Updated at {}",
                format_timestamp(&timestamp.with_timezone(&Local))
            ),
            ui::StyleType::Subtle
        )
    )
}

pub async fn run(fetcher: &RateFetcher) -> Result<(), ConversionError> {
    let spinner = ui::new_spinner("Fetching exchange rates...");
    let rates = fetcher.get_rates().await;
    spinner.finish_and_clear();

    let rates = rates?;
    println!("{}", display_rates(&rates, &fetcher.now()));
    Ok(())
}
