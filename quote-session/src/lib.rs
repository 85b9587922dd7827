pub mod session;

pub use session::{AUTOSAVE_DEBOUNCE, EditSession};
