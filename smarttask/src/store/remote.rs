use async_trait::async_trait;
use docstore::{Credentials, DocStoreClient, DocStoreError, Document, DocumentsURL, Fields, Value};

use super::{StoreError, TaskStore};
use crate::config::StoreConfig;
use crate::types::{NewTask, Priority, Task, TaskId, DEFAULT_REMINDER_MINUTES};

const FIELD_TITLE: &str = "title";
const FIELD_DESCRIPTION: &str = "description";
const FIELD_PRIORITY: &str = "priority";
const FIELD_COMPLETED: &str = "completed";
const FIELD_REMINDER_MINUTES: &str = "reminderMinutes";

/// Task store backed by the remote document collection.
#[derive(Debug, Clone)]
pub struct DocStoreTaskStore {
    client: DocStoreClient,
    collection: String,
    page_size: u32,
}

impl DocStoreTaskStore {
    pub fn from_config(cfg: &StoreConfig) -> anyhow::Result<Self> {
        if cfg.project_id.trim().is_empty() {
            anyhow::bail!("store.project_id is not configured. Run `smarttask config-path` to locate the config file.");
        }

        let documents = DocumentsURL::new(&cfg.base_url, &cfg.project_id, &cfg.database);
        let credentials = Credentials {
            api_key: Some(cfg.api_key.clone()).filter(|key| !key.is_empty()),
            bearer_token: cfg.bearer_token.clone(),
        };

        Ok(Self {
            client: DocStoreClient::new(documents, credentials),
            collection: cfg.collection.clone(),
            page_size: cfg.page_size.max(1),
        })
    }
}

#[async_trait]
impl TaskStore for DocStoreTaskStore {
    #[tracing::instrument(skip(self, task), fields(title = %task.title))]
    async fn create(&self, task: &NewTask) -> Result<Task, StoreError> {
        let doc = self
            .client
            .create_document(&self.collection, &encode_new_task(task))
            .await
            .map_err(into_store_error)?;

        decode_task(&doc)
    }

    #[tracing::instrument(skip(self))]
    async fn list_all(&self) -> Result<Vec<Task>, StoreError> {
        let docs = self
            .client
            .list_documents(&self.collection, self.page_size)
            .await
            .map_err(into_store_error)?;

        Ok(docs
            .into_iter()
            .filter_map(|listed| match listed {
                Ok(doc) => match decode_task(&doc) {
                    Ok(task) => Some(task),
                    Err(e) => {
                        tracing::warn!(document = %doc.name, "skipping task document: {}", e);
                        None
                    }
                },
                Err(e) => {
                    tracing::warn!(document = %e.name, reason = %e.reason, "skipping undecodable task document");
                    None
                }
            })
            .collect())
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn mark_complete(&self, id: &TaskId) -> Result<(), StoreError> {
        let mut fields = Fields::new();
        fields.insert(FIELD_COMPLETED.to_string(), Value::from(true));

        match self
            .client
            .update_fields(&self.collection, id.as_str(), &fields)
            .await
        {
            Ok(_) => Ok(()),
            Err(DocStoreError::NotFound(_)) => Err(StoreError::NotFound(id.clone())),
            Err(e) => Err(into_store_error(e)),
        }
    }
}

fn into_store_error(err: DocStoreError) -> StoreError {
    match err {
        DocStoreError::Unauthorized(message) => StoreError::Unauthorized(message),
        DocStoreError::Parsing(message) => StoreError::Malformed(message),
        other => StoreError::Unavailable(other.to_string()),
    }
}

fn encode_new_task(task: &NewTask) -> Fields {
    let mut fields = Fields::new();
    fields.insert(FIELD_TITLE.to_string(), Value::from(task.title.as_str()));
    fields.insert(
        FIELD_DESCRIPTION.to_string(),
        Value::from(task.description.as_str()),
    );
    fields.insert(
        FIELD_PRIORITY.to_string(),
        Value::from(task.priority.to_string()),
    );
    fields.insert(FIELD_COMPLETED.to_string(), Value::from(false));
    fields.insert(
        FIELD_REMINDER_MINUTES.to_string(),
        Value::from(task.reminder_minutes),
    );
    fields
}

/// Decode a stored document. Only the title is mandatory; documents written
/// by older clients may lack priority, description or the reminder delay.
fn decode_task(doc: &Document) -> Result<Task, StoreError> {
    let id = doc.id();
    if id.is_empty() {
        return Err(StoreError::Malformed("document has no name".to_string()));
    }

    let title = doc
        .get(FIELD_TITLE)
        .and_then(Value::as_str)
        .filter(|title| !title.trim().is_empty())
        .ok_or_else(|| StoreError::Malformed(format!("{} has no title", id)))?;

    let priority = doc
        .get(FIELD_PRIORITY)
        .and_then(Value::as_str)
        .and_then(|p| p.parse::<Priority>().ok())
        .unwrap_or_default();

    let reminder_minutes = doc
        .get(FIELD_REMINDER_MINUTES)
        .and_then(Value::as_i64)
        .and_then(|m| u32::try_from(m).ok())
        .filter(|m| *m > 0)
        .unwrap_or(DEFAULT_REMINDER_MINUTES);

    Ok(Task {
        id: TaskId::new(id),
        title: title.to_string(),
        description: doc
            .get(FIELD_DESCRIPTION)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        priority,
        completed: doc
            .get(FIELD_COMPLETED)
            .and_then(Value::as_bool)
            .unwrap_or(false),
        reminder_minutes,
        created_at: doc.create_time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TASKS_PATH: &str = "/v1/projects/p/databases/(default)/documents/tasks";

    fn doc_with(fields: Vec<(&str, Value)>) -> Document {
        Document {
            name: "projects/p/databases/(default)/documents/tasks/abc".to_string(),
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn encodes_all_task_fields() {
        let fields = encode_new_task(&NewTask {
            title: "Buy milk".to_string(),
            description: "2%".to_string(),
            priority: Priority::Low,
            reminder_minutes: 10,
        });

        assert_eq!(fields[FIELD_TITLE], Value::from("Buy milk"));
        assert_eq!(fields[FIELD_DESCRIPTION], Value::from("2%"));
        assert_eq!(fields[FIELD_PRIORITY], Value::from("Low"));
        assert_eq!(fields[FIELD_COMPLETED], Value::from(false));
        assert_eq!(fields[FIELD_REMINDER_MINUTES], Value::IntegerValue(10));
        assert_eq!(fields.len(), 5);
    }

    #[test]
    fn decodes_full_document() {
        let task = decode_task(&doc_with(vec![
            (FIELD_TITLE, Value::from("Buy milk")),
            (FIELD_DESCRIPTION, Value::from("2%")),
            (FIELD_PRIORITY, Value::from("High")),
            (FIELD_COMPLETED, Value::from(true)),
            (FIELD_REMINDER_MINUTES, Value::from(10_i64)),
        ]))
        .unwrap();

        assert_eq!(task.id, TaskId::from("abc"));
        assert_eq!(task.priority, Priority::High);
        assert!(task.completed);
        assert_eq!(task.reminder_minutes, 10);
    }

    #[test]
    fn legacy_document_gets_defaults() {
        let task = decode_task(&doc_with(vec![(FIELD_TITLE, Value::from("Old task"))])).unwrap();

        assert_eq!(task.description, "");
        assert_eq!(task.priority, Priority::Medium);
        assert!(!task.completed);
        assert_eq!(task.reminder_minutes, DEFAULT_REMINDER_MINUTES);
    }

    #[test]
    fn untitled_document_is_rejected() {
        let err = decode_task(&doc_with(vec![(FIELD_TITLE, Value::from("   "))])).unwrap_err();
        assert!(matches!(err, StoreError::Malformed(_)));
    }

    #[test]
    fn non_positive_reminder_falls_back_to_default() {
        let task = decode_task(&doc_with(vec![
            (FIELD_TITLE, Value::from("t")),
            (FIELD_REMINDER_MINUTES, Value::from(-3_i64)),
        ]))
        .unwrap();
        assert_eq!(task.reminder_minutes, DEFAULT_REMINDER_MINUTES);
    }

    #[test]
    fn config_without_project_is_rejected() {
        let cfg = StoreConfig::default();
        assert!(DocStoreTaskStore::from_config(&cfg).is_err());
    }

    fn store_for(server: &MockServer) -> DocStoreTaskStore {
        DocStoreTaskStore::from_config(&StoreConfig {
            base_url: format!("{}/v1", server.uri()),
            project_id: "p".to_string(),
            api_key: "secret".to_string(),
            ..Default::default()
        })
        .unwrap()
    }

    fn stored(id: &str, fields: serde_json::Value) -> serde_json::Value {
        json!({
            "name": format!("projects/p/databases/(default)/documents/tasks/{}", id),
            "fields": fields,
            "createTime": "2024-05-01T10:00:00Z",
            "updateTime": "2024-05-01T10:00:00Z"
        })
    }

    fn error_body(code: u16, status: &str) -> serde_json::Value {
        json!({ "error": { "code": code, "message": "", "status": status } })
    }

    #[tokio::test]
    async fn list_all_skips_bad_documents_and_keeps_the_rest() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(TASKS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "documents": [
                    stored("good", json!({ "title": { "stringValue": "Good" } })),
                    stored("untitled", json!({ "description": { "stringValue": "no title" } })),
                    stored("nan", json!({
                        "title": { "stringValue": "Typed letters" },
                        "reminderMinutes": { "doubleValue": "NaN" }
                    })),
                    stored("odd", json!({ "title": { "vectorValue": {} } }))
                ]
            })))
            .mount(&server)
            .await;

        let store = store_for(&server);
        let tasks = TaskStore::list_all(&store).await.unwrap();

        let ids: Vec<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["good", "nan"]);
        assert_eq!(tasks[1].reminder_minutes, DEFAULT_REMINDER_MINUTES);
        assert!(tasks[0].created_at.is_some());
    }

    #[tokio::test]
    async fn list_all_maps_401_to_unauthorized() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(TASKS_PATH))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(error_body(401, "UNAUTHENTICATED")),
            )
            .mount(&server)
            .await;

        let store = store_for(&server);
        let err = TaskStore::list_all(&store).await.unwrap_err();
        assert!(matches!(err, StoreError::Unauthorized(ref m) if m == "UNAUTHENTICATED"));
    }

    #[tokio::test]
    async fn create_returns_task_with_store_assigned_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(TASKS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(stored(
                "k3y",
                json!({
                    "title": { "stringValue": "Buy milk" },
                    "priority": { "stringValue": "High" },
                    "completed": { "booleanValue": false },
                    "reminderMinutes": { "integerValue": "15" }
                }),
            )))
            .expect(1)
            .mount(&server)
            .await;

        let store = store_for(&server);
        let task = TaskStore::create(
            &store,
            &NewTask {
                title: "Buy milk".to_string(),
                description: String::new(),
                priority: Priority::High,
                reminder_minutes: 15,
            },
        )
        .await
        .unwrap();

        assert_eq!(task.id, TaskId::from("k3y"));
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.reminder_minutes, 15);
    }

    #[tokio::test]
    async fn create_maps_403_to_unauthorized() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(TASKS_PATH))
            .respond_with(
                ResponseTemplate::new(403).set_body_json(error_body(403, "PERMISSION_DENIED")),
            )
            .mount(&server)
            .await;

        let store = store_for(&server);
        let err = TaskStore::create(
            &store,
            &NewTask {
                title: "t".to_string(),
                description: String::new(),
                priority: Priority::Medium,
                reminder_minutes: DEFAULT_REMINDER_MINUTES,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, StoreError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn mark_complete_maps_404_to_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path(format!("{}/gone", TASKS_PATH)))
            .respond_with(ResponseTemplate::new(404).set_body_json(error_body(404, "NOT_FOUND")))
            .mount(&server)
            .await;

        let store = store_for(&server);
        let id = TaskId::from("gone");
        let err = TaskStore::mark_complete(&store, &id).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(ref missing) if *missing == id));
    }

    #[tokio::test]
    async fn mark_complete_maps_server_error_to_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path(format!("{}/abc", TASKS_PATH)))
            .respond_with(ResponseTemplate::new(503).set_body_json(error_body(503, "UNAVAILABLE")))
            .mount(&server)
            .await;

        let store = store_for(&server);
        let err = TaskStore::mark_complete(&store, &TaskId::from("abc"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Unavailable(_)));
    }
}
