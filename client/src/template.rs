//! Rule template operations: list, import, delete.

use serde_json::Value;

use crate::client::ApiClient;
use crate::error::ApiError;

/// Rule template endpoints.
#[derive(Debug, Clone)]
pub struct TemplateApi {
    client: ApiClient,
}

impl TemplateApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn list(&self) -> Result<Value, ApiError> {
        self.client.get("/templates")
    }

    pub fn import(&self, data: &Value) -> Result<Value, ApiError> {
        self.client.post("/templates/import", Some(data))
    }

    pub fn delete(&self, id: u64) -> Result<Value, ApiError> {
        self.client.delete(&format!("/templates/{id}"))
    }
}
