//! Stock totals and the display tier derived from them.
//!
//! Stock is never persisted as a product-level number: the total is always
//! recomputed from the per-size rows so it cannot go stale.

/* --------------------------------------------------------------------------
Named constants
-------------------------------------------------------------------------- */

/// Totals strictly below this (and above zero) are shown as limited stock.
pub const LIMITED_STOCK_THRESHOLD: i64 = 10;

/* --------------------------------------------------------------------------
Stock tier
-------------------------------------------------------------------------- */

/// Display tier for a product's total stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockTier {
    /// Total stock is zero.
    OutOfStock,
    /// Total stock is in `1..LIMITED_STOCK_THRESHOLD`.
    Limited,
    /// Enough stock that no badge is shown.
    InStock,
}

impl StockTier {
    /// Classify a total stock figure.
    ///
    /// Negative totals cannot come from the store (`stock >= 0` is a column
    /// check) but are treated as out of stock rather than limited.
    pub fn from_total(total: i64) -> Self {
        if total <= 0 {
            Self::OutOfStock
        } else if total < LIMITED_STOCK_THRESHOLD {
            Self::Limited
        } else {
            Self::InStock
        }
    }

    /// Whether this tier gets a warning badge on the product card.
    pub fn has_badge(self) -> bool {
        !matches!(self, Self::InStock)
    }
}

/// Sum per-size stock counts into a product total.
pub fn total_stock<I>(stocks: I) -> i64
where
    I: IntoIterator<Item = i32>,
{
    stocks.into_iter().map(i64::from).sum()
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    // -- total_stock --

    #[test]
    fn total_of_no_sizes_is_zero() {
        assert_eq!(total_stock(Vec::<i32>::new()), 0);
    }

    #[test]
    fn total_sums_every_size() {
        assert_eq!(total_stock([0, 5]), 5);
        assert_eq!(total_stock([3, 4, 12]), 19);
    }

    #[test]
    fn total_does_not_overflow_i32() {
        assert_eq!(total_stock([i32::MAX, i32::MAX]), 2 * i64::from(i32::MAX));
    }

    // -- StockTier::from_total --

    #[test]
    fn zero_is_out_of_stock() {
        assert_eq!(StockTier::from_total(0), StockTier::OutOfStock);
    }

    #[test]
    fn below_threshold_is_limited() {
        assert_eq!(StockTier::from_total(1), StockTier::Limited);
        assert_eq!(StockTier::from_total(9), StockTier::Limited);
    }

    #[test]
    fn threshold_and_above_has_no_badge() {
        assert_eq!(StockTier::from_total(10), StockTier::InStock);
        assert_eq!(StockTier::from_total(250), StockTier::InStock);
        assert!(!StockTier::InStock.has_badge());
    }

    #[test]
    fn warning_tiers_have_badges() {
        assert!(StockTier::OutOfStock.has_badge());
        assert!(StockTier::Limited.has_badge());
    }
}
