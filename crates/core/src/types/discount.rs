//! Discount derivation from a price / compare-at price pair.

use rust_decimal::Decimal;

/// Display-oriented discount fields derived from a variant's price pair.
///
/// A pair is "discounted" when `compare_at_price > price > 0`. In that case
/// the compare-at (pre-discount) price becomes the displayed `price` and the
/// actual selling price becomes `discounted_price` - the original price is
/// the crossed-out one. This inversion is part of the UI contract and must
/// not be "corrected".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscountInfo {
    /// Displayed price. The compare-at price when discounted, otherwise the
    /// compare-at price if nonzero, falling back to the selling price.
    pub price: Decimal,
    /// The selling price, present only when the pair is discounted.
    pub discounted_price: Option<Decimal>,
    /// Discount percentage in `[0, 100]`, rounded to one decimal. Never
    /// computed when `compare_at_price <= 0` or `compare_at_price <= price`.
    pub discount_rate: Option<Decimal>,
}

impl DiscountInfo {
    /// Derive discount fields from `(price, compare_at_price)`.
    #[must_use]
    pub fn derive(price: Decimal, compare_at_price: Decimal) -> Self {
        if compare_at_price > price && price > Decimal::ZERO {
            let rate = ((compare_at_price - price) / compare_at_price * Decimal::ONE_HUNDRED)
                .round_dp(1);
            Self {
                price: compare_at_price,
                discounted_price: Some(price),
                discount_rate: Some(rate),
            }
        } else {
            Self {
                price: if compare_at_price.is_zero() {
                    price
                } else {
                    compare_at_price
                },
                discounted_price: None,
                discount_rate: None,
            }
        }
    }
}
