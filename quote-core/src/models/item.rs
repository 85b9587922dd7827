use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Stable identity for a line item.
///
/// Ids are assigned by the owning [`QuoteRecord`](crate::models::QuoteRecord)
/// in insertion order and are never reused after an item is removed, so error
/// keys and display references stay valid while other items are added,
/// reordered, or deleted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One purchasable line on a quote.
///
/// Numeric fields are permissive on purpose: the model accepts transient
/// invalid states while the user is editing (zero quantity, negative price,
/// discount outside 0–100). Flagging those is the validator's job, not the
/// model's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteItem {
    pub id: ItemId,

    /// Free-text description. May be empty while the user is still typing.
    pub name: String,

    pub quantity: Decimal,

    /// Unit price in the document currency.
    pub price: Decimal,

    /// Percentage discount applied to this line (0–100 by convention).
    pub discount: Decimal,
}

impl QuoteItem {
    /// Creates a blank item with the editing defaults: quantity 1, price 0,
    /// discount 0, empty description.
    pub fn new(id: ItemId) -> Self {
        Self {
            id,
            name: String::new(),
            quantity: Decimal::ONE,
            price: Decimal::ZERO,
            discount: Decimal::ZERO,
        }
    }
}
