//! One conversion attempt, from raw input to a renderable result.

use super::convert::{Conversion, convert};
use super::currency::{BASE_CURRENCY, RateSet};
use super::error::ConversionError;
use super::fetcher::RateFetcher;
use super::validate::parse_amount;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ConversionResult {
    pub amount: f64,
    pub base: &'static str,
    pub converted: Conversion,
    pub rates: Arc<RateSet>,
    pub timestamp: DateTime<Utc>,
}

/// Validates `raw`, obtains rates and converts. Invalid input never reaches the network.
pub async fn convert_amount(
    raw: &str,
    fetcher: &RateFetcher,
) -> Result<ConversionResult, ConversionError> {
    let amount = parse_amount(raw)?;
    let rates = fetcher.get_rates().await?;
    let converted = convert(amount, &rates);
    debug!(amount, ?converted, "Converted amount");

    Ok(ConversionResult {
        amount,
        base: BASE_CURRENCY,
        converted,
        rates,
        timestamp: fetcher.now(),
    })
}
