//! Record validation producing a path-keyed error report.
//!
//! [`validate`] is pure and total: it never mutates the record, never fails,
//! and always recomputes the whole report from scratch. It is meant to run
//! after every mutation — the work is linear in the item count, and full
//! recomputation avoids stale-error bugs that incremental updates invite.
//!
//! All rules run independently; an invalid company email does not stop the
//! item rules from reporting too. Whole-record validity is exactly "the
//! report is empty".

mod path;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::QuoteRecord;

pub use path::{FieldPath, InfoField, ItemField, PartyField};

/// Permissive email shape check: something, `@`, something, `.`, something,
/// with no whitespace or extra `@`. Rejects the obviously malformed without
/// attempting full RFC validation.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Why one field failed validation. The human-readable message is the
/// `Display` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is empty or whitespace-only (or, for the date, absent).
    #[error("This field is required")]
    Required,

    /// An email is present but does not look like an address.
    #[error("Invalid email format")]
    InvalidEmail,

    /// The quote has no line items at all.
    #[error("Add at least one item")]
    NoItems,

    /// Item quantity must be strictly positive.
    #[error("Quantity must be greater than zero")]
    QuantityNotPositive,

    /// Item price must not be negative.
    #[error("Price must not be negative")]
    NegativePrice,
}

/// Path-keyed collection of field errors for one record.
///
/// Absence of a path means that field currently passes. Iteration order is
/// deterministic (path order), so rendered error lists are stable across
/// recomputations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: BTreeMap<FieldPath, ValidationError>,
}

impl ValidationReport {
    /// `true` exactly when no rule produced an error.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The error at one location, if any.
    pub fn error(
        &self,
        path: FieldPath,
    ) -> Option<ValidationError> {
        self.errors.get(&path).copied()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldPath, ValidationError)> + '_ {
        self.errors.iter().map(|(path, error)| (*path, *error))
    }

    /// Flat string-keyed form for boundaries that want the dot-separated keys
    /// (`company.name`, `items.17.price`) with display messages.
    pub fn flatten(&self) -> BTreeMap<String, String> {
        self.errors
            .iter()
            .map(|(path, error)| (path.to_string(), error.to_string()))
            .collect()
    }

    fn insert(
        &mut self,
        path: FieldPath,
        error: ValidationError,
    ) {
        self.errors.insert(path, error);
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Two-tier email rule: required first, then shape.
fn email_error(email: &str) -> Option<ValidationError> {
    if is_blank(email) {
        Some(ValidationError::Required)
    } else if !EMAIL_RE.is_match(email) {
        Some(ValidationError::InvalidEmail)
    } else {
        None
    }
}

/// Evaluates every rule against the record and returns the full report.
pub fn validate(record: &QuoteRecord) -> ValidationReport {
    let mut report = ValidationReport::default();

    // Company: name, email, phone are required.
    if is_blank(&record.company.name) {
        report.insert(FieldPath::Company(PartyField::Name), ValidationError::Required);
    }
    if let Some(error) = email_error(&record.company.email) {
        report.insert(FieldPath::Company(PartyField::Email), error);
    }
    if is_blank(&record.company.phone) {
        report.insert(FieldPath::Company(PartyField::Phone), ValidationError::Required);
    }

    // Client: name and email only.
    if is_blank(&record.client.name) {
        report.insert(FieldPath::Client(PartyField::Name), ValidationError::Required);
    }
    if let Some(error) = email_error(&record.client.email) {
        report.insert(FieldPath::Client(PartyField::Email), error);
    }

    // Document metadata.
    if is_blank(&record.info.number) {
        report.insert(FieldPath::Info(InfoField::Number), ValidationError::Required);
    }
    if record.info.date.is_none() {
        report.insert(FieldPath::Info(InfoField::Date), ValidationError::Required);
    }
    if is_blank(&record.info.validity) {
        report.insert(FieldPath::Info(InfoField::Validity), ValidationError::Required);
    }

    // Items: collection-level rule, then per-item rules keyed by id.
    if record.items().is_empty() {
        report.insert(FieldPath::Items, ValidationError::NoItems);
    }
    for item in record.items() {
        if is_blank(&item.name) {
            report.insert(
                FieldPath::Item(item.id, ItemField::Name),
                ValidationError::Required,
            );
        }
        if item.quantity <= Decimal::ZERO {
            report.insert(
                FieldPath::Item(item.id, ItemField::Quantity),
                ValidationError::QuantityNotPositive,
            );
        }
        if item.price < Decimal::ZERO {
            report.insert(
                FieldPath::Item(item.id, ItemField::Price),
                ValidationError::NegativePrice,
            );
        }
    }

    report
}
