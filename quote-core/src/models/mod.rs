mod info;
mod item;
mod party;
mod record;

pub use info::QuoteInfo;
pub use item::{ItemId, QuoteItem};
pub use party::{ClientInfo, CompanyInfo};
pub use record::{QuoteRecord, Template};
