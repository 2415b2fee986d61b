use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::OffsetDateTime;

use crate::value::{Fields, Value};

/// A stored document. `name` is the full resource path ending in the
/// document key, e.g. `projects/p/databases/(default)/documents/tasks/abc`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default)]
    pub fields: Fields,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub create_time: Option<OffsetDateTime>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub update_time: Option<OffsetDateTime>,
}

impl Document {
    /// The document key, i.e. the last segment of `name`.
    pub fn id(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or_default()
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }
}

/// Request body for create and patch calls.
#[derive(Debug, Serialize)]
pub(crate) struct DocumentWrite<'a> {
    pub fields: &'a Fields,
}

/// A listed document whose body could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("undecodable document {name:?}: {reason}")]
pub struct UndecodableDocument {
    pub name: String,
    pub reason: String,
}

/// One entry of a listing. A bad document never fails the whole page.
pub type ListedDocument = Result<Document, UndecodableDocument>;

/// One page of a listing. Documents are kept raw until [`decode_documents`]
/// so each one decodes on its own.
///
/// [`decode_documents`]: ListDocumentsResponse::decode_documents
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDocumentsResponse {
    #[serde(default)]
    documents: Vec<serde_json::Value>,
    pub next_page_token: Option<String>,
}

impl ListDocumentsResponse {
    pub fn decode_documents(&self) -> Vec<ListedDocument> {
        self.documents.iter().map(decode_listed).collect()
    }
}

fn decode_listed(raw: &serde_json::Value) -> ListedDocument {
    Document::deserialize(raw).map_err(|e| UndecodableDocument {
        name: raw
            .get("name")
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default()
            .to_string(),
        reason: e.to_string(),
    })
}

/// Error payload, e.g. `{"error": {"code": 404, "message": "...", "status": "NOT_FOUND"}}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: ErrorStatus,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorStatus {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: String,
}
