//! Task operations: CRUD, execution, status polling, preview, and
//! template export.

use serde_json::Value;

use crate::client::ApiClient;
use crate::error::ApiError;

/// Task endpoints.
#[derive(Debug, Clone)]
pub struct TaskApi {
    client: ApiClient,
}

impl TaskApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List tasks; `params` (e.g. `page`, `pageSize`) are passed through
    /// to the server untouched.
    pub fn list(&self, params: &[(&str, &str)]) -> Result<Value, ApiError> {
        self.client.get_with_query("/tasks", params)
    }

    pub fn get(&self, id: u64) -> Result<Value, ApiError> {
        self.client.get(&format!("/tasks/{id}"))
    }

    pub fn create(&self, data: &Value) -> Result<Value, ApiError> {
        self.client.post("/tasks", Some(data))
    }

    pub fn update(&self, id: u64, data: &Value) -> Result<Value, ApiError> {
        self.client.put(&format!("/tasks/{id}"), Some(data))
    }

    pub fn delete(&self, id: u64) -> Result<Value, ApiError> {
        self.client.delete(&format!("/tasks/{id}"))
    }

    /// Start execution server-side; completion is observed by polling
    /// [`TaskApi::status`].
    pub fn execute(&self, id: u64) -> Result<Value, ApiError> {
        self.client.post(&format!("/tasks/{id}/execute"), None)
    }

    pub fn status(&self, id: u64) -> Result<Value, ApiError> {
        self.client.get(&format!("/tasks/{id}/status"))
    }

    /// Generate sample rows for a task configuration without saving it.
    pub fn preview(&self, data: &Value) -> Result<Value, ApiError> {
        self.client.post("/tasks/preview", Some(data))
    }

    /// Export the task's rule configuration as a reusable template.
    pub fn export_template(&self, id: u64, data: &Value) -> Result<Value, ApiError> {
        self.client.post(&format!("/tasks/{id}/export-template"), Some(data))
    }
}
