//! A set of utilities for working with the decimal numbers behind money.

use rust_decimal::prelude::*;

/// Create a number.
///
/// This is a thin wrapper around `rust_decimal_macros::dec!` so callers (and
/// our tests) can write exact decimal literals without depending on
/// `rust_decimal` or its macro crate themselves.
#[macro_export]
macro_rules! num {
    ($($val:tt)*) => {
        {
            #[allow(unused_imports)]
            use $crate::Decimal;
            $crate::rust_decimal_macros::dec!($($val)*)
        }
    }
}

/// Format a decimal amount for display.
///
/// The amount is rounded to `decimal_place` digits (midpoints away from zero),
/// the integer part is grouped by thousands with `thousand_mark` and the
/// fraction is zero-padded after `decimal_mark`. Negative amounts are wrapped
/// in parentheses. A negative amount that rounds to zero formats as a plain
/// zero.
pub(crate) fn format_amount(amount: &Decimal, decimal_place: u32, decimal_mark: &str, thousand_mark: &str) -> String {
    let mut rounded = amount.round_dp_with_strategy(decimal_place, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(decimal_place);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let digits = rounded.abs().to_string();
    let (int_part, frac_part) = match digits.find('.') {
        Some(idx) => (&digits[..idx], &digits[idx + 1..]),
        None => (&digits[..], ""),
    };

    let mut formatted = group_thousands(int_part, thousand_mark);
    if decimal_place > 0 {
        formatted.push_str(decimal_mark);
        formatted.push_str(frac_part);
        // rescale can't go past the decimal's max scale, so pad the rest
        for _ in frac_part.len()..(decimal_place as usize) {
            formatted.push('0');
        }
    }

    if negative {
        format!("({})", formatted)
    } else {
        formatted
    }
}

/// Insert `mark` between every group of three integer digits, counting from
/// the right.
fn group_thousands(int_part: &str, mark: &str) -> String {
    let len = int_part.len();
    let mut grouped = String::with_capacity(len + (len / 3) * mark.len());
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && i % 3 == len % 3 {
            grouped.push_str(mark);
        }
        grouped.push(ch);
    }
    grouped
}


#[cfg(test)]
mod num_tests {
    // nothing from rust_decimal is imported here, the macro has to bring it

    #[test]
    fn num_needs_no_imports() {
        let amount = num!(1.5);
        assert_eq!(amount.to_string(), "1.5");
        assert_eq!(num!(-0.000000001).to_string(), "-0.000000001");
        assert_eq!(num!(1000), crate::Decimal::from(1000u32));
    }
}
