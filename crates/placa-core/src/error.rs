//! # Error Types
//!
//! Failure families for the prediction core, one focused enum each. All
//! errors use `thiserror` for derive-based `Display` and `Error`
//! implementations and are raised at the point of detection — the core
//! never logs, retries, or swallows them.

use thiserror::Error;

/// Errors raised while parsing and validating a license plate.
#[derive(Error, Debug)]
pub enum PlateError {
    /// The input was empty or whitespace-only.
    #[error("no license plate provided; expected e.g. PBA-1234 (car) or PA-123J (motorcycle)")]
    MissingInput,

    /// The normalized input does not match the plate grammar.
    #[error("license plate {0:?} has an invalid format; expected e.g. PBA-1234 (car) or PA-123J (motorcycle)")]
    InvalidFormat(String),

    /// The character expected to carry the decision digit is not a decimal
    /// digit. Unreachable for grammar-valid input; kept as a guard against
    /// future grammar changes.
    #[error("could not extract the last digit from license plate {0:?}")]
    DigitExtraction(String),
}

/// Errors raised by the circulation decision engine.
#[derive(Error, Debug)]
pub enum PredictError {
    /// The supplied digit is outside `0..=9`. Cannot arise from a parsed
    /// [`LicensePlate`](crate::LicensePlate); this is a caller contract
    /// violation.
    #[error("last digit must be a single decimal digit (0-9), got {0}")]
    InvalidDigit(u8),
}
