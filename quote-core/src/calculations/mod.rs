//! Monetary calculations for quote documents.
//!
//! Everything here is pure: functions read the item list and tax rate and
//! return derived values without touching the record. Results are exact
//! [`Decimal`](rust_decimal::Decimal) values; rounding to two decimal places
//! happens only at the display boundary via [`common::round_half_up`].

pub mod common;
pub mod totals;

pub use totals::{QuoteTotals, compute_totals, item_amount};
