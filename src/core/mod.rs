//! Core conversion logic, free of any terminal concerns

pub mod cache;
pub mod clock;
pub mod config;
pub mod conversion;
pub mod convert;
pub mod currency;
pub mod error;
pub mod fetcher;
pub mod log;
pub mod quote;
pub mod validate;

// Re-export main types for cleaner imports
pub use cache::RateCache;
pub use conversion::{ConversionResult, convert_amount};
pub use currency::{BASE_CURRENCY, QuoteCurrency, RateSet};
pub use error::ConversionError;
pub use fetcher::RateFetcher;
pub use quote::QuoteProvider;
