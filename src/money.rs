//! The money module holds `Money`, an exact decimal amount paired with the
//! [Currency] it's counted in.
//!
//! Money values are never modified in place. Every operation hands back a new
//! value (or an error), and any operation involving two money values demands
//! that they share a currency: you can't add dollars to euros here.
//!
//! Arithmetic is done through the standard operators, all of which return a
//! `Result`:
//!
//! ```
//! use money_core::{num, money::Money};
//!
//! let fee = Money::from_code(num!(1.25), "USD").unwrap();
//! let total = (fee.clone() * num!(4)).unwrap();
//! assert_eq!(total, Money::from_code(num!(5), "usd").unwrap());
//! assert!((total + Money::from_code(num!(1), "EUR").unwrap()).is_err());
//! ```
//!
//! [Currency]: ../currency/struct.Currency.html

use crate::{
    currency::Currency,
    error::{Error, Result},
};
use getset::Getters;
use rust_decimal::prelude::*;
#[cfg(feature = "with_serde")]
use serde_derive::{Serialize, Deserialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub, Mul, Div};

/// An amount of some currency.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Getters)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
#[getset(get = "pub")]
pub struct Money {
    /// The amount, with no rounding applied. Can be negative.
    amount: Decimal,
    currency: Currency,
}

impl Money {
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self {
            amount,
            currency,
        }
    }

    /// Pair an amount with a currency we may or may not have. Handy when the
    /// currency comes from a lookup (like [catalog::get]) that can miss.
    ///
    /// [catalog::get]: ../catalog/fn.get.html
    pub fn from_parts(amount: Decimal, currency: Option<Currency>) -> Result<Self> {
        let currency = currency.ok_or(Error::CurrencyRequired)?;
        Ok(Self::new(amount, currency))
    }

    /// Create money from an amount and a currency code. The code is
    /// upper-cased before we look it up, so "usd" is fine here.
    pub fn from_code(amount: Decimal, code: &str) -> Result<Self> {
        let currency = Currency::from_code(&code.to_uppercase())?;
        Ok(Self::new(amount, currency))
    }

    pub fn zero(currency: Currency) -> Self {
        Self::new(Decimal::zero(), currency)
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Compare two amounts of the same currency. Comparing across currencies
    /// is an error.
    pub fn compare(&self, other: &Money) -> Result<Ordering> {
        self.assert_same_currency(other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    /// Render this money using its currency's formatting rules.
    pub fn render(&self) -> String {
        self.currency.render(self, None)
    }

    /// Render this money in one of its currency's subtypes (ie "mBTC"). If
    /// the currency doesn't have that subtype, this is the same as `render()`.
    pub fn render_as(&self, sub_type: &str) -> String {
        self.currency.render(self, Some(sub_type))
    }

    fn assert_same_currency(&self, other: &Money) -> Result<()> {
        if self.currency != other.currency {
            tracing::trace!(left = %self.currency.iso_code(), right = %other.currency.iso_code(), "money currency mismatch");
            Err(Error::CurrencyMismatch(self.currency.iso_code().clone(), other.currency.iso_code().clone()))?;
        }
        Ok(())
    }

    /// Run an amount operation, keeping our currency on the result.
    fn apply(&self, rhs: Decimal, op: fn(Decimal, Decimal) -> Result<Decimal>) -> Result<Money> {
        Ok(Self::new(op(self.amount, rhs)?, self.currency.clone()))
    }
}

fn add_amounts(left: Decimal, right: Decimal) -> Result<Decimal> {
    left.checked_add(right).ok_or(Error::Overflow)
}

fn sub_amounts(left: Decimal, right: Decimal) -> Result<Decimal> {
    left.checked_sub(right).ok_or(Error::Overflow)
}

fn mul_amounts(left: Decimal, right: Decimal) -> Result<Decimal> {
    left.checked_mul(right).ok_or(Error::Overflow)
}

fn div_amounts(left: Decimal, right: Decimal) -> Result<Decimal> {
    if right.is_zero() {
        Err(Error::DivisionByZero)?;
    }
    left.checked_div(right).ok_or(Error::Overflow)
}

/// Implements one arithmetic operator for every owned/borrowed combination of
/// `Money` with `Money`, and of `Money` with a `Decimal` scalar.
///
/// Money-with-money requires matching currencies. Note that this includes
/// multiplying and dividing two money values, which gives you (for instance)
/// "dollars squared" labeled as dollars. It's kept for compatibility with
/// existing callers; prefer the scalar forms.
macro_rules! money_op {
    ($trait:ident, $method:ident, $op:tt, $amount_fn:ident) => {
        impl<'a, 'b> $trait<&'b Money> for &'a Money {
            type Output = Result<Money>;

            fn $method(self, rhs: &'b Money) -> Result<Money> {
                self.assert_same_currency(rhs)?;
                self.apply(rhs.amount, $amount_fn)
            }
        }

        impl $trait<Money> for Money {
            type Output = Result<Money>;

            fn $method(self, rhs: Money) -> Result<Money> {
                &self $op &rhs
            }
        }

        impl<'b> $trait<&'b Money> for Money {
            type Output = Result<Money>;

            fn $method(self, rhs: &'b Money) -> Result<Money> {
                &self $op rhs
            }
        }

        impl<'a> $trait<Money> for &'a Money {
            type Output = Result<Money>;

            fn $method(self, rhs: Money) -> Result<Money> {
                self $op &rhs
            }
        }

        impl<'a> $trait<Decimal> for &'a Money {
            type Output = Result<Money>;

            fn $method(self, rhs: Decimal) -> Result<Money> {
                self.apply(rhs, $amount_fn)
            }
        }

        impl $trait<Decimal> for Money {
            type Output = Result<Money>;

            fn $method(self, rhs: Decimal) -> Result<Money> {
                &self $op rhs
            }
        }
    }
}

money_op!(Add, add, +, add_amounts);
money_op!(Sub, sub, -, sub_amounts);
money_op!(Mul, mul, *, mul_amounts);
money_op!(Div, div, /, div_amounts);

impl PartialOrd for Money {
    /// Money in different currencies has no ordering, so every comparison
    /// operator returns false across currencies. Use `compare()` if you want
    /// an error instead.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.currency != other.currency {
            return None;
        }
        Some(self.amount.cmp(&other.amount))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
