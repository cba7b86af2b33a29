use super::currency::{QuoteCurrency, RateSet};
use std::collections::BTreeMap;

pub type Conversion = BTreeMap<QuoteCurrency, f64>;

/// Converts a base amount into every quote currency. No rounding is applied.
pub fn convert(amount: f64, rates: &RateSet) -> Conversion {
    rates
        .iter()
        .map(|(currency, rate)| (currency, amount / rate))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_divides_by_rate() {
        let rates = RateSet::new(5.0, 6.0).unwrap();
        let converted = convert(100.0, &rates);

        assert_eq!(converted[&QuoteCurrency::Usd], 20.0);
        assert_eq!(converted[&QuoteCurrency::Eur], 100.0 / 6.0);
        assert!((converted[&QuoteCurrency::Eur] - 16.666_666).abs() < 1e-5);
    }

    #[test]
    fn test_convert_is_exact_division() {
        let rates = RateSet::new(5.4321, 6.0123).unwrap();
        for amount in [0.01, 1.0, 3.3, 1234.56, 1e9] {
            let converted = convert(amount, &rates);
            assert_eq!(converted[&QuoteCurrency::Usd], amount / 5.4321);
            assert_eq!(converted[&QuoteCurrency::Eur], amount / 6.0123);
        }
    }
}
