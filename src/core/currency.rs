//! Currencies and the rate model

use anyhow::{Result, bail};
use std::collections::BTreeMap;
use std::fmt::Display;

/// The currency user amounts are denominated in.
pub const BASE_CURRENCY: &str = "BRL";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum QuoteCurrency {
    Usd,
    Eur,
}

impl QuoteCurrency {
    pub const ALL: [QuoteCurrency; 2] = [QuoteCurrency::Usd, QuoteCurrency::Eur];

    pub fn code(&self) -> &'static str {
        match self {
            QuoteCurrency::Usd => "USD",
            QuoteCurrency::Eur => "EUR",
        }
    }

    /// Key the quote provider uses for this currency against the base, e.g. `USDBRL`.
    pub fn pair_key(&self) -> String {
        format!("{}{}", self.code(), BASE_CURRENCY)
    }
}

impl Display for QuoteCurrency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Base units per one unit of each quote currency.
///
/// Always holds a positive, finite rate for every [`QuoteCurrency`]. A refresh
/// replaces the whole set; it is never updated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct RateSet {
    rates: BTreeMap<QuoteCurrency, f64>,
}

impl RateSet {
    pub fn new(usd: f64, eur: f64) -> Result<Self> {
        Self::from_rates(BTreeMap::from([
            (QuoteCurrency::Usd, usd),
            (QuoteCurrency::Eur, eur),
        ]))
    }

    pub fn from_rates(rates: BTreeMap<QuoteCurrency, f64>) -> Result<Self> {
        for currency in QuoteCurrency::ALL {
            match rates.get(&currency) {
                Some(rate) if rate.is_finite() && *rate > 0.0 => {}
                Some(rate) => bail!("Invalid rate for {}: {}", currency, rate),
                None => bail!("Missing rate for {}", currency),
            }
        }
        Ok(Self { rates })
    }

    pub fn get(&self, currency: QuoteCurrency) -> f64 {
        // from_rates guarantees every currency is present
        self.rates[&currency]
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuoteCurrency, f64)> + '_ {
        self.rates.iter().map(|(c, r)| (*c, *r))
    }
}
