//! Line amount and document total calculations.
//!
//! The calculator is deliberately permissive: it has no error conditions and
//! computes whatever it is given. Negative prices, zero quantities, and
//! discounts outside 0–100 all flow through arithmetically (a negative
//! discount increases the line). Flagging those inputs is the validator's
//! responsibility, so totals can always be displayed, even mid-edit on an
//! invalid record.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use quote_core::calculations::compute_totals;
//! use quote_core::models::QuoteRecord;
//!
//! let mut record = QuoteRecord::new();
//! let first = record.items()[0].id;
//! {
//!     let item = record.item_mut(first).unwrap();
//!     item.quantity = dec!(2);
//!     item.price = dec!(100);
//!     item.discount = dec!(10);
//! }
//! let second = record.add_item();
//! {
//!     let item = record.item_mut(second).unwrap();
//!     item.quantity = dec!(1);
//!     item.price = dec!(50);
//! }
//!
//! let totals = compute_totals(record.items(), dec!(16));
//!
//! assert_eq!(totals.subtotal, dec!(230));
//! assert_eq!(totals.tax_amount, dec!(36.8));
//! assert_eq!(totals.total, dec!(266.8));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::QuoteItem;

/// Derived monetary totals for one quote document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteTotals {
    /// Sum of discounted line amounts before tax.
    pub subtotal: Decimal,

    /// `subtotal × taxRate / 100`.
    pub tax_amount: Decimal,

    /// `subtotal + tax_amount`.
    pub total: Decimal,
}

impl QuoteTotals {
    pub const ZERO: Self = Self {
        subtotal: Decimal::ZERO,
        tax_amount: Decimal::ZERO,
        total: Decimal::ZERO,
    };
}

/// Net amount for one line: `quantity × price × (1 − discount/100)`.
///
/// The discount applies multiplicatively to this line only, never to the
/// running subtotal.
pub fn item_amount(item: &QuoteItem) -> Decimal {
    item.quantity * item.price * (Decimal::ONE - item.discount / Decimal::ONE_HUNDRED)
}

/// Computes subtotal, tax amount, and grand total from the item list and the
/// document-wide tax rate (in percent).
///
/// Items are summed in sequence order so the result is reproducible. An empty
/// list yields all zeros regardless of the tax rate. No rounding happens
/// here; callers round at the display boundary only.
pub fn compute_totals(
    items: &[QuoteItem],
    tax_rate: Decimal,
) -> QuoteTotals {
    let subtotal: Decimal = items.iter().map(item_amount).sum();
    let tax_amount = subtotal * tax_rate / Decimal::ONE_HUNDRED;
    QuoteTotals {
        subtotal,
        tax_amount,
        total: subtotal + tax_amount,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use crate::models::ItemId;

    use super::*;

    fn item(
        quantity: Decimal,
        price: Decimal,
        discount: Decimal,
    ) -> QuoteItem {
        QuoteItem {
            id: ItemId(1),
            name: String::new(),
            quantity,
            price,
            discount,
        }
    }

    // =========================================================================
    // item_amount tests
    // =========================================================================

    #[test]
    fn item_amount_applies_percentage_discount_to_the_line() {
        let result = item_amount(&item(dec!(2), dec!(100), dec!(10)));

        assert_eq!(result, dec!(180));
    }

    #[test]
    fn item_amount_without_discount_is_quantity_times_price() {
        let result = item_amount(&item(dec!(3), dec!(19.99), dec!(0)));

        assert_eq!(result, dec!(59.97));
    }

    #[test]
    fn item_amount_full_discount_zeroes_the_line() {
        let result = item_amount(&item(dec!(5), dec!(120), dec!(100)));

        assert_eq!(result, dec!(0));
    }

    #[test]
    fn item_amount_negative_discount_increases_the_line() {
        // Out-of-range discounts are not clamped; the validator owns ranges.
        let result = item_amount(&item(dec!(1), dec!(100), dec!(-10)));

        assert_eq!(result, dec!(110));
    }

    #[test]
    fn item_amount_is_non_increasing_in_discount() {
        let base = item(dec!(4), dec!(25), dec!(0));

        let mut previous = item_amount(&base);
        for discount in [dec!(10), dec!(25), dec!(50), dec!(99), dec!(100)] {
            let current = item_amount(&item(dec!(4), dec!(25), discount));
            assert!(current <= previous, "amount rose when discount grew");
            previous = current;
        }
    }

    #[test]
    fn item_amount_tolerates_negative_price() {
        // Semantically invalid, arithmetically fine; validation flags it.
        let result = item_amount(&item(dec!(2), dec!(-10), dec!(0)));

        assert_eq!(result, dec!(-20));
    }

    // =========================================================================
    // compute_totals tests
    // =========================================================================

    #[test]
    fn empty_items_yield_all_zero_totals_for_any_tax_rate() {
        for tax_rate in [dec!(0), dec!(16), dec!(100), dec!(-7)] {
            let totals = compute_totals(&[], tax_rate);

            assert_eq!(totals, QuoteTotals::ZERO);
        }
    }

    #[test]
    fn zero_tax_rate_makes_total_equal_subtotal() {
        let items = [item(dec!(2), dec!(100), dec!(0))];

        let totals = compute_totals(&items, dec!(0));

        assert_eq!(totals.tax_amount, dec!(0));
        assert_eq!(totals.total, totals.subtotal);
    }

    #[test]
    fn reference_scenario_two_items_sixteen_percent_tax() {
        let items = [
            item(dec!(2), dec!(100), dec!(10)),
            item(dec!(1), dec!(50), dec!(0)),
        ];

        let totals = compute_totals(&items, dec!(16));

        assert_eq!(totals.subtotal, dec!(230));
        assert_eq!(totals.tax_amount, dec!(36.8));
        assert_eq!(totals.total, dec!(266.8));
    }

    #[test]
    fn total_is_exactly_subtotal_plus_tax_without_rounding() {
        let items = [item(dec!(3), dec!(0.333), dec!(0))];

        let totals = compute_totals(&items, dec!(7));

        assert_eq!(totals.subtotal, dec!(0.999));
        assert_eq!(totals.tax_amount, dec!(0.06993));
        assert_eq!(totals.total, dec!(1.06893));
    }

    #[test]
    fn subtotal_sums_lines_in_sequence_order() {
        let items = [
            item(dec!(1), dec!(10), dec!(0)),
            item(dec!(1), dec!(20), dec!(50)),
            item(dec!(2), dec!(5), dec!(0)),
        ];

        let totals = compute_totals(&items, dec!(0));

        assert_eq!(totals.subtotal, dec!(30));
    }

    #[test]
    fn invalid_inputs_propagate_into_totals() {
        // Best-effort totals while the record is mid-edit and invalid.
        let items = [item(dec!(-1), dec!(100), dec!(0))];

        let totals = compute_totals(&items, dec!(16));

        assert_eq!(totals.subtotal, dec!(-100));
        assert_eq!(totals.total, dec!(-116));
    }
}
