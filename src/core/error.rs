//! Errors surfaced to the user for a single conversion attempt.

use thiserror::Error;

pub const VALIDATION_MESSAGE: &str = "Please enter a valid amount greater than zero.";
pub const NETWORK_MESSAGE: &str = "Could not fetch exchange rates. Please try again.";

/// A conversion attempt fails with exactly one of these. Neither is retried.
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("{}", VALIDATION_MESSAGE)]
    Validation,

    /// The message is fixed; the provider failure is kept as the source.
    #[error("{}", NETWORK_MESSAGE)]
    Network(#[source] anyhow::Error),
}
