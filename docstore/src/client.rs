use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::document::{Document, DocumentWrite, ErrorBody, ListDocumentsResponse, ListedDocument};
use crate::value::Fields;
use crate::DocumentsURL;

/// Credentials attached to every request. The API key goes in the `key`
/// query parameter, the bearer token (if any) in `Authorization`.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub api_key: Option<String>,
    pub bearer_token: Option<String>,
}

impl Credentials {
    pub fn api_key(key: impl Into<String>) -> Self {
        Self {
            api_key: Some(key.into()),
            bearer_token: None,
        }
    }
}

/// Client for a single database of a REST document store.
#[derive(Debug, Clone)]
pub struct DocStoreClient {
    http: reqwest::Client,
    documents: DocumentsURL,
    credentials: Credentials,
}

impl DocStoreClient {
    pub fn new(documents: DocumentsURL, credentials: Credentials) -> Self {
        Self {
            http: reqwest::Client::new(),
            documents,
            credentials,
        }
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let request = match self.credentials.api_key.as_deref() {
            Some(key) if !key.is_empty() => request.query(&[("key", key)]),
            _ => request,
        };
        match self.credentials.bearer_token.as_deref() {
            Some(token) if !token.is_empty() => request.bearer_auth(token),
            _ => request,
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        call_name: &str,
    ) -> Result<T, DocStoreError> {
        let resp = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| DocStoreError::Request(format!("{}: {}", call_name, e)))?;

        let status = resp.status();
        if status.is_success() {
            return resp.json::<T>().await.map_err(|e| {
                DocStoreError::Parsing(format!("Failed to parse {} response: {}", call_name, e))
            });
        }

        let body = resp.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ErrorBody>(&body) {
            Ok(parsed) if !parsed.error.message.is_empty() => parsed.error.message,
            Ok(parsed) => parsed.error.status,
            Err(_) => body,
        };
        tracing::debug!(%status, call_name, %message, "document store call failed");

        Err(match status {
            StatusCode::NOT_FOUND => DocStoreError::NotFound(message),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                DocStoreError::Unauthorized(message)
            }
            _ => DocStoreError::Api {
                status: status.as_u16(),
                message,
            },
        })
    }

    /// Creates a document with a store-assigned key and returns it as stored.
    #[tracing::instrument(level = "debug", skip(self, fields))]
    pub async fn create_document(
        &self,
        collection: &str,
        fields: &Fields,
    ) -> Result<Document, DocStoreError> {
        let url = self.documents.collection(collection);
        self.send(
            self.http
                .post(url.as_ref())
                .json(&DocumentWrite { fields }),
            "create document",
        )
        .await
    }

    /// Fetches a single page of a collection.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn list_documents_page(
        &self,
        collection: &str,
        page_size: u32,
        page_token: Option<&str>,
    ) -> Result<ListDocumentsResponse, DocStoreError> {
        let url = self.documents.collection(collection);
        let mut request = self
            .http
            .get(url.as_ref())
            .query(&[("pageSize", page_size.to_string())]);
        if let Some(token) = page_token {
            request = request.query(&[("pageToken", token)]);
        }

        self.send(request, "list documents").await
    }

    /// Fetches every document in a collection, following page tokens. Each
    /// document decodes on its own; undecodable ones come back as `Err` entries.
    pub async fn list_documents(
        &self,
        collection: &str,
        page_size: u32,
    ) -> Result<Vec<ListedDocument>, DocStoreError> {
        let mut documents = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let page = self
                .list_documents_page(collection, page_size, page_token.as_deref())
                .await?;
            documents.extend(page.decode_documents());

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        Ok(documents)
    }

    /// Overwrites the given fields of an existing document, leaving the rest
    /// untouched. Fails with [`DocStoreError::NotFound`] if the document does
    /// not exist instead of creating it.
    #[tracing::instrument(level = "debug", skip(self, fields))]
    pub async fn update_fields(
        &self,
        collection: &str,
        document_id: &str,
        fields: &Fields,
    ) -> Result<Document, DocStoreError> {
        let url = self.documents.document(collection, document_id);
        let mut query: Vec<(&str, &str)> = fields
            .keys()
            .map(|field| ("updateMask.fieldPaths", field.as_str()))
            .collect();
        query.push(("currentDocument.exists", "true"));

        self.send(
            self.http
                .patch(url.as_ref())
                .query(&query)
                .json(&DocumentWrite { fields }),
            "update document",
        )
        .await
    }
}

#[derive(Error, Debug)]
pub enum DocStoreError {
    #[error("NotFound: {0}")]
    NotFound(String),
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("ApiError ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("RequestError: {0}")]
    Request(String),
    #[error("ParsingError: {0}")]
    Parsing(String),
}
