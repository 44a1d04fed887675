//! Price formatting for the Indonesian storefront.
//!
//! Prices are stored as `NUMERIC(12,2)` but always displayed as whole
//! rupiah with `.` as the thousands separator, e.g. `Rp 1.250.000`.

use rust_decimal::{Decimal, RoundingStrategy};

/// Currency prefix shown before every price.
pub const CURRENCY_PREFIX: &str = "Rp";

/// Format a price as a whole-rupiah display string (`Rp 1.250.000`).
pub fn format_rupiah(price: Decimal) -> String {
    format!("{CURRENCY_PREFIX} {}", group_thousands(price))
}

/// Round to a whole number (half away from zero) and group digits in threes.
pub fn group_thousands(value: Decimal) -> String {
    let rounded = value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .trunc();
    let digits = rounded.abs().to_string();

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_millions() {
        assert_eq!(format_rupiah(Decimal::new(125_000_000, 2)), "Rp 1.250.000");
    }

    #[test]
    fn small_values_have_no_separator() {
        assert_eq!(format_rupiah(Decimal::ZERO), "Rp 0");
        assert_eq!(format_rupiah(Decimal::new(950, 0)), "Rp 950");
    }

    #[test]
    fn exact_thousand_boundaries() {
        assert_eq!(group_thousands(Decimal::new(1_000, 0)), "1.000");
        assert_eq!(group_thousands(Decimal::new(100_000, 0)), "100.000");
        assert_eq!(group_thousands(Decimal::new(1_000_000_000, 0)), "1.000.000.000");
    }

    #[test]
    fn fractional_part_is_rounded_away() {
        // 349999.50 -> 350000
        assert_eq!(group_thousands(Decimal::new(34_999_950, 2)), "350.000");
        // 349999.49 -> 349999
        assert_eq!(group_thousands(Decimal::new(34_999_949, 2)), "349.999");
    }

    #[test]
    fn negative_values_keep_their_sign() {
        assert_eq!(group_thousands(Decimal::new(-25_000, 0)), "-25.000");
        assert_eq!(group_thousands(Decimal::new(-4, 1)), "0");
    }
}
