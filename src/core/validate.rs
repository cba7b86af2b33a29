use super::error::ConversionError;

/// Parses user input into a positive, finite amount.
pub fn parse_amount(raw: &str) -> Result<f64, ConversionError> {
    match raw.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount > 0.0 => Ok(amount),
        _ => Err(ConversionError::Validation),
    }
}

/// True iff `raw` is a positive, finite decimal number.
pub fn validate(raw: &str) -> bool {
    parse_amount(raw).is_ok()
}
