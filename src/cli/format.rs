//! pt-BR style number, money and time formatting.

use crate::core::currency::{BASE_CURRENCY, QuoteCurrency};
use chrono::{DateTime, TimeZone};
use std::fmt::Display;

pub fn currency_symbol(code: &str) -> &str {
    match code {
        "BRL" => "R$",
        "USD" => "US$",
        "EUR" => "€",
        other => other,
    }
}

/// Formats with `.` thousands grouping and `,` as the decimal separator.
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (formatted.as_str(), None),
    };

    let mut out = String::new();
    if value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0') {
        out.push('-');
    }
    let len = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    if let Some(frac_part) = frac_part {
        out.push(',');
        out.push_str(frac_part);
    }
    out
}

pub fn format_money(value: f64, code: &str) -> String {
    format!("{} {}", currency_symbol(code), format_number(value, 2))
}

pub fn format_rate(currency: QuoteCurrency, rate: f64) -> String {
    format!(
        "1 {} = {} {}",
        currency.code(),
        currency_symbol(BASE_CURRENCY),
        format_number(rate, 4)
    )
}

pub fn format_timestamp<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    timestamp.format("%d/%m/%Y, %H:%M:%S").to_string()
}
