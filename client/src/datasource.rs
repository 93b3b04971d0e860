//! Datasource operations: CRUD, connection probing, and table metadata.
//!
//! Payloads are opaque JSON pass-through; the server owns validation and
//! the datasource lifecycle.

use serde_json::Value;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::http::encode_segment;

/// Datasource endpoints.
#[derive(Debug, Clone)]
pub struct DatasourceApi {
    client: ApiClient,
}

impl DatasourceApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn list(&self) -> Result<Value, ApiError> {
        self.client.get("/datasource")
    }

    pub fn get(&self, id: u64) -> Result<Value, ApiError> {
        self.client.get(&format!("/datasource/{id}"))
    }

    pub fn create(&self, data: &Value) -> Result<Value, ApiError> {
        self.client.post("/datasource", Some(data))
    }

    pub fn update(&self, id: u64, data: &Value) -> Result<Value, ApiError> {
        self.client.put(&format!("/datasource/{id}"), Some(data))
    }

    pub fn delete(&self, id: u64) -> Result<Value, ApiError> {
        self.client.delete(&format!("/datasource/{id}"))
    }

    /// Probe connectivity for an unsaved datasource configuration. A
    /// failed probe surfaces like any other failure, notification
    /// included.
    pub fn test_connection(&self, data: &Value) -> Result<Value, ApiError> {
        self.client.post("/datasource/test", Some(data))
    }

    pub fn tables(&self, id: u64) -> Result<Value, ApiError> {
        self.client.get(&format!("/datasource/tables/{id}"))
    }

    pub fn table_structure(&self, id: u64, table: &str) -> Result<Value, ApiError> {
        self.client.get(&format!("/datasource/table/{id}/{}", encode_segment(table)))
    }
}
