use chrono::Local;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{ClientInfo, CompanyInfo, ItemId, QuoteInfo, QuoteItem};

/// Visual template variants for the rendering layer.
///
/// Carried opaquely by the record; nothing in the core branches on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    #[default]
    Modern,
    Classic,
    Elegant,
    Bold,
    Minimal,
}

/// The full aggregate describing one quote/invoice draft.
///
/// Owned and mutated by exactly one editing session; the calculator and
/// validator only read it. The item list and id counter are private so the
/// id invariants hold: ids are unique for the lifetime of the record and are
/// never reused after a removal, even across a save/load round trip (the
/// counter is persisted with the record).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecord {
    /// Opaque handle to an uploaded logo image, if any.
    pub logo: Option<String>,

    /// Accent color for the rendered document, as a CSS hex string.
    pub color: String,

    pub company: CompanyInfo,
    pub client: ClientInfo,
    pub info: QuoteInfo,

    items: Vec<QuoteItem>,
    next_item_id: u64,

    /// Single aggregate tax rate in percent, applied to the whole document.
    pub tax_rate: Decimal,

    pub notes: String,
    pub conditions: String,
    pub template: Template,
}

impl QuoteRecord {
    pub const DEFAULT_COLOR: &'static str = "#2563EB";

    /// The starting draft: today's issue date, one blank item, everything
    /// else empty or defaulted.
    pub fn new() -> Self {
        let today = Local::now().date_naive();
        Self {
            logo: None,
            color: Self::DEFAULT_COLOR.to_string(),
            company: CompanyInfo::default(),
            client: ClientInfo::default(),
            info: QuoteInfo::new(today),
            items: vec![QuoteItem::new(ItemId(1))],
            next_item_id: 2,
            tax_rate: Decimal::ZERO,
            notes: String::new(),
            conditions: String::new(),
            template: Template::default(),
        }
    }

    /// Items in display/print order. Insertion order is preserved through
    /// add/update/remove.
    pub fn items(&self) -> &[QuoteItem] {
        &self.items
    }

    /// Appends a blank item and returns its freshly assigned id.
    pub fn add_item(&mut self) -> ItemId {
        let id = ItemId(self.next_item_id);
        self.next_item_id += 1;
        self.items.push(QuoteItem::new(id));
        id
    }

    /// Mutable access to one item by id, for in-place field edits.
    pub fn item_mut(
        &mut self,
        id: ItemId,
    ) -> Option<&mut QuoteItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Removes the item with the given id, keeping the order of the rest.
    /// Returns `false` when no such item exists. The id is retired, not
    /// recycled.
    pub fn remove_item(
        &mut self,
        id: ItemId,
    ) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Moves the item with the given id to `index` (clamped to the end),
    /// shifting the others. Returns `false` when no such item exists.
    pub fn move_item(
        &mut self,
        id: ItemId,
        index: usize,
    ) -> bool {
        let Some(from) = self.items.iter().position(|item| item.id == id) else {
            return false;
        };
        let item = self.items.remove(from);
        let to = index.min(self.items.len());
        self.items.insert(to, item);
        true
    }
}

impl Default for QuoteRecord {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn new_record_has_single_blank_item_and_defaults() {
        let record = QuoteRecord::new();

        assert_eq!(record.items().len(), 1);
        assert_eq!(record.items()[0].id, ItemId(1));
        assert_eq!(record.color, "#2563EB");
        assert_eq!(record.info.currency, "USD");
        assert_eq!(record.tax_rate, Decimal::ZERO);
        assert_eq!(record.template, Template::Modern);
        assert!(record.info.date.is_some());
    }

    #[test]
    fn add_item_assigns_sequential_ids() {
        let mut record = QuoteRecord::new();

        let second = record.add_item();
        let third = record.add_item();

        assert_eq!(second, ItemId(2));
        assert_eq!(third, ItemId(3));
        assert_eq!(record.items().len(), 3);
    }

    #[test]
    fn removed_ids_are_never_reused() {
        let mut record = QuoteRecord::new();
        let second = record.add_item();

        assert!(record.remove_item(second));
        let third = record.add_item();

        assert_eq!(third, ItemId(3));
    }

    #[test]
    fn remove_item_preserves_order_of_the_rest() {
        let mut record = QuoteRecord::new();
        let second = record.add_item();
        let third = record.add_item();

        assert!(record.remove_item(second));

        let ids: Vec<ItemId> = record.items().iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![ItemId(1), third]);
    }

    #[test]
    fn remove_missing_item_is_a_no_op() {
        let mut record = QuoteRecord::new();

        assert!(!record.remove_item(ItemId(99)));
        assert_eq!(record.items().len(), 1);
    }

    #[test]
    fn move_item_reorders_and_clamps_index() {
        let mut record = QuoteRecord::new();
        let second = record.add_item();

        assert!(record.move_item(second, 0));
        let ids: Vec<ItemId> = record.items().iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![second, ItemId(1)]);

        assert!(record.move_item(second, 100));
        let ids: Vec<ItemId> = record.items().iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![ItemId(1), second]);
    }

    #[test]
    fn item_mut_edits_in_place() {
        let mut record = QuoteRecord::new();
        let id = record.items()[0].id;

        {
            let item = record.item_mut(id).unwrap();
            item.name = "Consulting".to_string();
            item.price = dec!(150);
        }

        assert_eq!(record.items()[0].name, "Consulting");
        assert_eq!(record.items()[0].price, dec!(150));
    }

    #[test]
    fn serde_round_trip_is_exact() {
        let mut record = QuoteRecord::new();
        record.company.name = "Acme Gmbh — Büro".to_string();
        record.client.name = "日本クライアント".to_string();
        record.notes = "Café ☕ line\nsecond line".to_string();
        record.tax_rate = dec!(16);
        let second = record.add_item();
        {
            let item = record.item_mut(second).unwrap();
            item.name = "Überweisung".to_string();
            item.quantity = dec!(0.000001);
            item.price = dec!(79228162514264.337593543950335);
            item.discount = dec!(-5);
        }

        let json = serde_json::to_string(&record).unwrap();
        let restored: QuoteRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, record);
    }

    #[test]
    fn serde_round_trip_preserves_retired_ids() {
        let mut record = QuoteRecord::new();
        let second = record.add_item();
        record.remove_item(second);

        let json = serde_json::to_string(&record).unwrap();
        let mut restored: QuoteRecord = serde_json::from_str(&json).unwrap();

        // The counter travels with the record, so the retired id stays retired.
        assert_eq!(restored.add_item(), ItemId(3));
    }

    #[test]
    fn serde_round_trip_with_zero_items() {
        let mut record = QuoteRecord::new();
        record.remove_item(ItemId(1));

        let json = serde_json::to_string(&record).unwrap();
        let restored: QuoteRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, record);
        assert!(restored.items().is_empty());
    }

    #[test]
    fn template_serializes_lowercase() {
        let json = serde_json::to_string(&Template::Elegant).unwrap();

        assert_eq!(json, "\"elegant\"");
    }
}
