#[derive(Debug, Clone)]
pub struct DocumentsURL(String);

impl AsRef<str> for DocumentsURL {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl DocumentsURL {
    /// Root of the documents tree:
    /// `{base_url}/projects/{project}/databases/{database}/documents`.
    pub fn new(base_url: &str, project_id: &str, database: &str) -> Self {
        Self(format!(
            "{}/projects/{}/databases/{}/documents",
            base_url.trim_end_matches('/'),
            urlencoding::encode(project_id),
            database,
        ))
    }

    pub fn collection(&self, collection: &str) -> Self {
        self.append_segment(collection)
    }

    pub fn document(&self, collection: &str, document_id: &str) -> Self {
        self.append_segment(collection).append_segment(document_id)
    }

    fn append_segment(&self, segment: &str) -> Self {
        let trimmed = segment.trim_matches('/');
        Self(format!("{}/{}", self.0, urlencoding::encode(trimmed)))
    }
}
