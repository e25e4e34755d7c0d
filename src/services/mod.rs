//! Service layer for business logic.
//!
//! This module contains the normalization engine and field edits, the editing
//! session that ties them together, and the persistence and export boundaries.

pub mod edit;
pub mod export;
pub mod normalize;
pub mod session;
pub mod store;

// Re-export commonly used types and functions
pub use edit::{add_option, edit_field, edit_option, remove_option, reorder, OptionField};
pub use normalize::change_type;
pub use session::{CollapseMap, EditorSession};
pub use store::{load_session, save_session, FileStore, MemoryStore, SessionStore, StoreKey};
