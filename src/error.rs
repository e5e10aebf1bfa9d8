//! The error module defines every failure a money operation can produce.
//!
//! Lookups by key (catalog codes, currency subtypes) are not errors: they hand
//! back an `Option` and leave it to the caller to decide whether a miss
//! matters.

use thiserror::Error;

/// Our main error enum.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum Error {
    /// The given code isn't in the currency catalog.
    #[error("invalid ISO currency code: {0}")]
    InvalidCurrencyCode(String),
    /// A money value was built without a currency.
    #[error("currency is required")]
    CurrencyRequired,
    /// A binary operation was attempted on two different currencies (left,
    /// right).
    #[error("currency mismatch: {0} vs {1}")]
    CurrencyMismatch(String, String),
    #[error("division by zero")]
    DivisionByZero,
    /// The result doesn't fit in the decimal type.
    #[error("decimal overflow")]
    Overflow,
}

pub type Result<T> = std::result::Result<T, Error>;
