use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Document-level metadata: numbering, currency, dates, payment terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteInfo {
    /// Document number, e.g. "Q-2025-001". Required non-empty for a valid quote.
    pub number: String,

    /// Currency code carried opaquely into the rendered document ("USD" default).
    /// No conversion happens anywhere in the core.
    pub currency: String,

    /// Issue date. `None` while the user has cleared the field; validation
    /// flags the absence.
    pub date: Option<NaiveDate>,

    /// Free-text validity period, e.g. "30 days".
    pub validity: String,

    /// Optional free-text payment method description.
    pub payment_method: String,
}

impl QuoteInfo {
    pub const DEFAULT_CURRENCY: &'static str = "USD";

    /// Metadata for a fresh draft issued on `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            number: String::new(),
            currency: Self::DEFAULT_CURRENCY.to_string(),
            date: Some(today),
            validity: String::new(),
            payment_method: String::new(),
        }
    }
}
