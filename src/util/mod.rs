//! A set of utility functions used when operating on money.

#[macro_use]
pub mod number;

