//! Persistence
//!
//! Translation documents at user-chosen paths, and configuration profiles
//! in the application's data directory. Both are JSON.

pub mod document;
pub mod profiles;

pub use document::{load_document, save_document, TranslationDocument, TIMESTAMP_FORMAT, VERSION};
pub use profiles::{ConfigStore, ProfileChanges};
