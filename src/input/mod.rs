//! Input processing module
//! Loads stored resume and job documents and converts them into scoring profiles

pub mod document;
pub mod store;

pub use document::{DocumentKind, StoredDocument};
pub use store::{load_document, ProfileStore};
