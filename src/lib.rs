//! Welcome to the money core, a small library for handling amounts of money
//! without mixing up currencies or losing precision along the way.
//!
//! There are three pieces:
//!
//! - the [catalog], a fixed table of the currencies we know about
//! - [Currency], which identifies a denomination (and knows how to print
//!   amounts of it)
//! - [Money], an exact decimal amount of some currency
//!
//! ```
//! use money_core::{num, Money};
//!
//! let price = Money::from_code(num!(19.99), "USD").unwrap();
//! let total = (price * num!(3)).unwrap();
//! assert_eq!(total.render(), "$59.97");
//! ```
//!
//! [catalog]: catalog/index.html
//! [Currency]: currency/struct.Currency.html
//! [Money]: money/struct.Money.html

#[doc(hidden)]
pub use rust_decimal_macros;

#[macro_use]
mod util;
pub mod error;
pub mod catalog;
pub mod currency;
pub mod money;

pub use currency::{Currency, CurrencySubType};
pub use money::Money;
pub use rust_decimal::Decimal;

