//! Minimal client for a REST document database: typed field values,
//! create, paged listing and masked updates of documents in a collection.

mod client;
mod document;
mod documents_url;
mod value;

pub use client::*;
pub use document::{Document, ListDocumentsResponse, ListedDocument, UndecodableDocument};
pub use documents_url::DocumentsURL;
pub use value::*;
