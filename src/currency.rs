//! The currency module holds the `Currency` value, which identifies the
//! denomination a [Money] amount is counted in.
//!
//! Currencies are normally resolved from the [catalog] by ISO code, but can be
//! built by hand for denominations the catalog doesn't know about. Either way,
//! two currencies are the same currency if (and only if) their ISO codes match.
//!
//! [Money]: ../money/struct.Money.html
//! [catalog]: ../catalog/index.html

use crate::{
    catalog,
    error::{Error, Result},
    money::Money,
    util::number,
};
use getset::{CopyGetters, Getters};
use rust_decimal::prelude::*;
#[cfg(feature = "with_serde")]
use serde_derive::{Serialize, Deserialize};
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// An alternate, display-only denomination of a currency. For instance, BTC
/// can be shown in mBTC (1 BTC = 1000 mBTC).
#[derive(Clone, Debug, PartialEq, Getters)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
#[getset(get = "pub")]
pub struct CurrencySubType {
    /// The symbol printed in front of amounts shown in this subtype.
    symbol: String,
    /// What we multiply a base-unit amount by to get the subtype amount.
    scale_to_unit: Decimal,
}

impl CurrencySubType {
    pub fn new<T: Into<String>>(symbol: T, scale_to_unit: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            scale_to_unit,
        }
    }
}

/// A monetary denomination.
///
/// Everything but the ISO code is display metadata: equality and hashing only
/// ever look at `iso_code`.
#[derive(Clone, Debug, Getters, CopyGetters, derive_builder::Builder)]
#[builder(pattern = "owned", setter(into))]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
pub struct Currency {
    /// The currency's code, ie "USD" or "BTC".
    #[getset(get = "pub")]
    iso_code: String,
    /// Whether this is a digital (crypto) currency rather than fiat.
    #[builder(default)]
    #[getset(get_copy = "pub")]
    is_digital: bool,
    /// The human name for this currency ("US dollar").
    #[getset(get = "pub")]
    general_name: String,
    #[getset(get = "pub")]
    symbol: String,
    /// How many decimal places we show when rendering amounts.
    #[getset(get_copy = "pub")]
    decimal_place: u32,
    /// How many decimal places the smallest unit of this currency supports.
    #[getset(get_copy = "pub")]
    base_decimal_place: u32,
    #[builder(default = "String::from(\".\")")]
    #[getset(get = "pub")]
    decimal_mark: String,
    #[builder(default = "String::from(\",\")")]
    #[getset(get = "pub")]
    thousand_mark: String,
    /// Alternate display denominations, keyed by name (ie "mBTC").
    #[builder(default)]
    #[getset(get = "pub")]
    sub_types: HashMap<String, CurrencySubType>,
}

impl Currency {
    /// Resolve a currency from the catalog by its (case-sensitive) ISO code.
    ///
    /// The returned value is our own copy of the catalog entry.
    pub fn from_code(code: &str) -> Result<Self> {
        match catalog::get(code) {
            Some(currency) => Ok(currency.clone()),
            None => {
                tracing::trace!(code = %code, "rejected unknown currency code");
                Err(Error::InvalidCurrencyCode(code.into()))
            }
        }
    }

    /// Build a currency directly, bypassing the catalog. Nothing here is
    /// validated.
    #[allow(clippy::too_many_arguments)]
    pub fn new(iso_code: impl Into<String>, is_digital: bool, general_name: impl Into<String>, symbol: impl Into<String>, decimal_place: u32, base_decimal_place: u32, decimal_mark: impl Into<String>, thousand_mark: impl Into<String>, sub_types: HashMap<String, CurrencySubType>) -> Self {
        Self {
            iso_code: iso_code.into(),
            is_digital,
            general_name: general_name.into(),
            symbol: symbol.into(),
            decimal_place,
            base_decimal_place,
            decimal_mark: decimal_mark.into(),
            thousand_mark: thousand_mark.into(),
            sub_types,
        }
    }

    pub fn builder() -> CurrencyBuilder {
        CurrencyBuilder::default()
    }

    /// Grab one of this currency's display subtypes, if it has it.
    pub fn sub_type(&self, key: &str) -> Option<&CurrencySubType> {
        self.sub_types.get(key)
    }

    /// Describe how this currency lays out numbers, in the familiar
    /// `positive;(negative)` pattern form, ie `#,0.00;(#,0.00)` for USD.
    pub fn number_format_pattern(&self) -> String {
        let zeros = "0".repeat(self.decimal_place as usize);
        format!("#{}0{}{};(#,0.{})", self.thousand_mark, self.decimal_mark, zeros, zeros)
    }

    /// Render a money amount using this currency's formatting rules.
    ///
    /// If `sub_type` names one of our subtypes, the amount is scaled into that
    /// subtype and printed with its symbol. Otherwise (no key, or a key we
    /// don't have) the amount is printed as-is after our own symbol.
    pub fn render(&self, money: &Money, sub_type: Option<&str>) -> String {
        let mut symbol = self.symbol.as_str();
        let mut amount = *money.amount();
        if let Some(sub) = sub_type.and_then(|key| self.sub_type(key)) {
            // an amount too big to scale stays in the base unit
            if let Some(scaled) = amount.checked_mul(*sub.scale_to_unit()) {
                symbol = sub.symbol().as_str();
                amount = scaled;
            }
        }
        format!("{}{}", symbol, number::format_amount(&amount, self.decimal_place, &self.decimal_mark, &self.thousand_mark))
    }

    /// The diagnostic tag for this currency: its code followed by its symbol.
    pub fn to_display_tag(&self) -> String {
        format!("{}{}", self.iso_code, self.symbol)
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.iso_code == other.iso_code
    }
}

impl Eq for Currency {}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.iso_code.hash(state);
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_display_tag())
    }
}

impl FromStr for Currency {
    type Err = Error;

    fn from_str(code: &str) -> Result<Self> {
        Self::from_code(code)
    }
}
