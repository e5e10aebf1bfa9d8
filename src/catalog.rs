//! The catalog is the fixed, process-wide table of currencies we know about,
//! keyed by ISO code.
//!
//! The table is built once, the first time anyone touches it, and is never
//! modified afterwards. Lookups are exact and case-sensitive: "usd" is not
//! "USD".

use crate::currency::{Currency, CurrencySubType};
use lazy_static::lazy_static;
use std::collections::HashMap;

/// (code, digital, name, symbol, decimal place, base decimal place, subtypes)
///
/// Every currency in the table uses "." as its decimal mark and "," as its
/// thousand mark.
type CatalogEntry = (&'static str, bool, &'static str, &'static str, u32, u32, &'static [(&'static str, &'static str, u32)]);

const ENTRIES: &[CatalogEntry] = &[
    ("AUD", false, "Australian dollar",  "$",    2, 2, &[]),
    ("BTC", true,  "Bitcoin",            "฿",    3, 8, &[("mBTC", "mBTC ", 1000)]),
    ("CAD", false, "Canadian dollar",    "$",    2, 2, &[]),
    ("CNY", false, "Renminbi",           "¥",    2, 2, &[]),
    ("EUR", false, "Euro",               "€",    2, 2, &[]),
    ("GBP", false, "Pound sterling",     "£",    2, 2, &[]),
    ("HKD", false, "Hong Kong dollar",   "HKD$", 2, 2, &[]),
    ("IDR", false, "Indonesian rupiah",  "Rp",   2, 2, &[]),
    ("INR", false, "Indian rupee",       "Rs",   2, 2, &[]),
    ("JPY", false, "Japanese yen",       "¥",    0, 0, &[]),
    ("KRW", false, "South Korean won",   "₩",    0, 0, &[]),
    ("LTC", true,  "Litecoin",           "L",    3, 8, &[("mLTC", "mLTC ", 1000)]),
    ("MOP", false, "Pataca",             "MOP$", 2, 2, &[]),
    ("NZD", false, "New Zealand dollar", "$",    2, 2, &[]),
    ("PHP", false, "Philippine peso",    "P",    2, 2, &[]),
    ("RUB", false, "Russian ruble",      "PP",   2, 2, &[]),
    ("SGD", false, "Singapore dollar",   "S$",   2, 2, &[]),
    ("TWD", false, "New Taiwan dollar",  "$",    2, 2, &[]),
    ("USD", false, "US dollar",          "$",    2, 2, &[]),
    ("VND", false, "Vietnamese dong",    "₫",    2, 2, &[]),
    ("ZAR", false, "South African rand", "R",    2, 2, &[]),
];

lazy_static! {
    static ref CURRENCIES: HashMap<&'static str, Currency> = load();
}

fn load() -> HashMap<&'static str, Currency> {
    let mut currencies = HashMap::with_capacity(ENTRIES.len());
    for (code, digital, name, symbol, decimal_place, base_decimal_place, subs) in ENTRIES.iter() {
        let sub_types = subs.iter()
            .map(|(key, sub_symbol, scale)| (key.to_string(), CurrencySubType::new(*sub_symbol, (*scale).into())))
            .collect::<HashMap<_, _>>();
        let currency = Currency::new(*code, *digital, *name, *symbol, *decimal_place, *base_decimal_place, ".", ",", sub_types);
        currencies.insert(*code, currency);
    }
    tracing::debug!(count = currencies.len(), "loaded currency catalog");
    currencies
}

/// Check whether we know about the given currency code.
pub fn exists(code: &str) -> bool {
    CURRENCIES.contains_key(code)
}

/// Look up a currency by code. A miss is not an error, you just get `None`.
pub fn get(code: &str) -> Option<&'static Currency> {
    CURRENCIES.get(code)
}

/// All the codes in the catalog, sorted.
pub fn codes() -> impl Iterator<Item = &'static str> {
    ENTRIES.iter().map(|entry| entry.0)
}

pub fn len() -> usize {
    CURRENCIES.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entry_loads() {
        assert_eq!(len(), 21);
        assert_eq!(codes().count(), 21);
        for code in codes() {
            assert!(exists(code));
            let currency = get(code).unwrap();
            assert_eq!(currency.iso_code(), code);
            assert_eq!(currency.decimal_mark(), ".");
            assert_eq!(currency.thousand_mark(), ",");
            assert!(currency.base_decimal_place() >= currency.decimal_place());
        }
    }

    #[test]
    fn codes_are_sorted() {
        let codes = codes().collect::<Vec<_>>();
        let mut sorted = codes.clone();
        sorted.sort();
        assert_eq!(codes, sorted);
    }

    #[test]
    fn misses() {
        assert!(!exists("XYZ"));
        assert!(!exists("usd"));
        assert!(!exists(" USD"));
        assert!(!exists(""));
        assert_eq!(get("XYZ"), None);
        assert_eq!(get("btc"), None);
    }

    #[test]
    fn reference_data() {
        let jpy = get("JPY").unwrap();
        assert_eq!(jpy.general_name(), "Japanese yen");
        assert_eq!(jpy.symbol(), "¥");
        assert_eq!(jpy.decimal_place(), 0);
        assert_eq!(jpy.is_digital(), false);

        let hkd = get("HKD").unwrap();
        assert_eq!(hkd.symbol(), "HKD$");
        assert_eq!(hkd.decimal_place(), 2);

        let ltc = get("LTC").unwrap();
        assert_eq!(ltc.is_digital(), true);
        assert_eq!(ltc.base_decimal_place(), 8);
        assert_eq!(ltc.sub_type("mLTC").unwrap().scale_to_unit(), &num!(1000));

        let digital = codes().filter(|code| get(code).unwrap().is_digital()).collect::<Vec<_>>();
        assert_eq!(digital, vec!["BTC", "LTC"]);
    }

    #[test]
    fn lookups_hand_out_copies() {
        let from_catalog = get("BTC").unwrap();
        let owned = Currency::from_code("BTC").unwrap();
        assert_eq!(&owned, from_catalog);
        assert_eq!(owned.sub_types(), from_catalog.sub_types());
        drop(owned);
        assert!(get("BTC").unwrap().sub_type("mBTC").is_some());
    }
}
