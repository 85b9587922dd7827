use std::fmt;

use crate::models::ItemId;

/// Fields of a party block shared by company and client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PartyField {
    Name,
    Email,
    Phone,
}

impl PartyField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }
}

/// Fields of the document metadata block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InfoField {
    Number,
    Date,
    Validity,
}

impl InfoField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Date => "date",
            Self::Validity => "validity",
        }
    }
}

/// Fields of one line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ItemField {
    Name,
    Quantity,
    Price,
}

impl ItemField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Quantity => "quantity",
            Self::Price => "price",
        }
    }
}

/// Addressable location of one validation error.
///
/// A closed set of locations instead of ad hoc strings, so rule coverage is
/// checked at compile time. Item-level locations carry the item's persistent
/// [`ItemId`], never its position, so reordering or removing other items does
/// not relabel an existing error.
///
/// The [`Display`](fmt::Display) form reproduces the flat dot-separated keys
/// the rendering boundary consumes: `company.name`, `info.date`, `items`,
/// `items.{id}.price`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldPath {
    Company(PartyField),
    Client(PartyField),
    Info(InfoField),
    /// The item collection as a whole (e.g. "no items at all").
    Items,
    Item(ItemId, ItemField),
}

impl fmt::Display for FieldPath {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Company(field) => write!(f, "company.{}", field.as_str()),
            Self::Client(field) => write!(f, "client.{}", field.as_str()),
            Self::Info(field) => write!(f, "info.{}", field.as_str()),
            Self::Items => write!(f, "items"),
            Self::Item(id, field) => write!(f, "items.{}.{}", id, field.as_str()),
        }
    }
}
