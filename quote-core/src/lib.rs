pub mod calculations;
pub mod models;
pub mod store;
pub mod validation;

pub use calculations::{QuoteTotals, compute_totals, item_amount};
pub use models::*;
pub use store::{DRAFT_KEY, DraftStore, StoreError, load_or_default};
pub use validation::{FieldPath, ValidationError, ValidationReport, validate};
