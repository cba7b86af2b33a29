use super::format::{format_money, format_rate, format_timestamp};
use super::ui;
use crate::core::{ConversionError, ConversionResult, RateFetcher, convert_amount};
use chrono::Local;
use comfy_table::Cell;

impl ConversionResult {
    pub fn display_as_table(&self) -> String {
        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Currency"),
            ui::header_cell("Amount"),
            ui::header_cell("Rate"),
        ]);

        for (currency, value) in &self.converted {
            table.add_row(vec![
                Cell::new(currency.code()),
                ui::amount_cell(format_money(*value, currency.code())),
                ui::rate_cell(format_rate(*currency, self.rates.get(*currency))),
            ]);
        }

        let mut output = format!(
            "{} {}\n\n",
            ui::style_text(&format!("Amount ({}):", self.base), ui::StyleType::TotalLabel),
            ui::style_text(&format_money(self.amount, self.base), ui::StyleType::Title)
        );
        output.push_str(&table.to_string());
        output.push_str(&format!(
            "\n\n{}",
            ui::style_text(
                &format!(
                    "Updated at {}",
                    format_timestamp(&self.timestamp.with_timezone(&Local))
                ),
                ui::StyleType::Subtle
            )
        ));
        output
    }
}

pub fn display_error(error: &ConversionError) -> String {
    ui::style_text(&error.to_string(), ui::StyleType::Error)
}

/// Runs one conversion with the loading spinner shown around it.
pub async fn convert_with_spinner(
    raw: &str,
    fetcher: &RateFetcher,
) -> Result<ConversionResult, ConversionError> {
    let spinner = ui::new_spinner("Fetching exchange rates...");
    let result = convert_amount(raw, fetcher).await;
    spinner.finish_and_clear();
    result
}

/// One-shot conversion. The error is returned so the process can exit non-zero.
pub async fn run(raw: &str, fetcher: &RateFetcher) -> Result<(), ConversionError> {
    let result = convert_with_spinner(raw, fetcher).await?;
    println!("{}", result.display_as_table());
    Ok(())
}
