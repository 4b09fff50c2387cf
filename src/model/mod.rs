//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod entry;
pub mod entry_list;
pub mod error;
pub mod key_action;

// Re-export for convenience
pub use entry::{trim_field, Entry, EntryRejection, MAX_ENTRY_CHARS};
pub use entry_list::{EntryList, DEFAULT_CAPACITY};
pub use error::AppError;
pub use key_action::KeyAction;
