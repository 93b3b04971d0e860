//! The shared API client and its response pipeline.
//!
//! # Design
//! `ApiClient` is an explicitly constructed value, not a process-wide
//! singleton: it holds the base URL plus shared handles to a
//! [`Transport`] and a [`Notifier`], and each resource API receives its
//! own clone. Every call funnels through [`ApiClient::dispatch`], which
//! classifies the outcome, fires exactly one notification on failure, and
//! hands the caller either the decoded body or the classified
//! [`ApiError`]. Nothing is retried and nothing is swallowed.

use std::sync::Arc;

use serde_json::Value;

use crate::error::ApiError;
use crate::http::{encode_query, HttpMethod, HttpRequest, HttpResponse};
use crate::messages;
use crate::notify::{LogNotifier, Notifier};
use crate::transport::{Transport, TransportError, UreqTransport};

/// Path prefix prepended to every endpoint.
pub const API_PREFIX: &str = "/api";

const CONTENT_TYPE_JSON: (&str, &str) = ("content-type", "application/json");

/// Shared HTTP client for the task service API.
///
/// Cloning is cheap; clones share the same transport and notifier.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Arc<dyn Transport>,
    notifier: Arc<dyn Notifier>,
}

impl ApiClient {
    /// Client with the production `ureq` transport and the logging
    /// notifier.
    pub fn new(base_url: &str) -> Self {
        Self::with_parts(base_url, Arc::new(UreqTransport::new()), Arc::new(LogNotifier))
    }

    /// Client with explicit transport and notifier, used by embedders
    /// wiring in their own display mechanism and by tests.
    pub fn with_parts(base_url: &str, transport: Arc<dyn Transport>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            base_url: format!("{}{API_PREFIX}", base_url.trim_end_matches('/')),
            transport,
            notifier,
        }
    }

    pub fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.dispatch(self.build(HttpMethod::Get, path, None))
    }

    pub fn get_with_query(&self, path: &str, params: &[(&str, &str)]) -> Result<Value, ApiError> {
        let query = encode_query(params);
        if query.is_empty() {
            return self.get(path);
        }
        self.dispatch(self.build(HttpMethod::Get, &format!("{path}?{query}"), None))
    }

    pub fn post(&self, path: &str, body: Option<&Value>) -> Result<Value, ApiError> {
        let body = self.encode_body(body)?;
        self.dispatch(self.build(HttpMethod::Post, path, body))
    }

    pub fn put(&self, path: &str, body: Option<&Value>) -> Result<Value, ApiError> {
        let body = self.encode_body(body)?;
        self.dispatch(self.build(HttpMethod::Put, path, body))
    }

    pub fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.dispatch(self.build(HttpMethod::Delete, path, None))
    }

    fn build(&self, method: HttpMethod, path: &str, body: Option<String>) -> HttpRequest {
        HttpRequest {
            method,
            url: format!("{}{path}", self.base_url),
            headers: vec![(CONTENT_TYPE_JSON.0.to_string(), CONTENT_TYPE_JSON.1.to_string())],
            body,
        }
    }

    /// Serialize an outgoing payload; a failure here is a local error that
    /// never reaches the transport.
    fn encode_body(&self, body: Option<&Value>) -> Result<Option<String>, ApiError> {
        match body {
            None => Ok(None),
            Some(value) => match serde_json::to_string(value) {
                Ok(encoded) => Ok(Some(encoded)),
                Err(err) => Err(self.fail(ApiError::Request(err.to_string()))),
            },
        }
    }

    /// Execute one request and classify the outcome.
    fn dispatch(&self, request: HttpRequest) -> Result<Value, ApiError> {
        tracing::debug!(url = %request.url, "sending request");
        let response = match self.transport.send(&request) {
            Ok(response) => response,
            Err(TransportError::NoResponse(detail)) => {
                return Err(self.fail(ApiError::NoResponse(detail)));
            }
            Err(TransportError::Request(detail)) => {
                return Err(self.fail(ApiError::Request(detail)));
            }
        };
        self.interpret(response)
    }

    /// The response side of the pipeline: non-2xx statuses go through the
    /// status table, 2xx bodies are decoded and checked for an embedded
    /// `error` field, and only a clean body is returned to the caller.
    fn interpret(&self, response: HttpResponse) -> Result<Value, ApiError> {
        if !response.is_success() {
            let body_error = embedded_error(&response.body);
            let message = messages::for_status(response.status, body_error.as_deref());
            return Err(self.fail(ApiError::Status { status: response.status, message }));
        }

        let payload: Value = match serde_json::from_str(&response.body) {
            Ok(payload) => payload,
            Err(err) => return Err(self.fail(ApiError::Decode(err.to_string()))),
        };

        if let Some(message) = payload.get("error").and_then(Value::as_str) {
            if !message.is_empty() {
                return Err(self.fail(ApiError::Application(message.to_string())));
            }
        }

        Ok(payload)
    }

    /// Single failure exit: log, notify once, hand the error back.
    fn fail(&self, err: ApiError) -> ApiError {
        tracing::error!(error = %err, "request failed");
        self.notifier.error(&err.notification());
        err
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").field("base_url", &self.base_url).finish_non_exhaustive()
    }
}

/// Extract a non-empty `error` string field from a JSON body, if the body
/// is JSON at all.
fn embedded_error(body: &str) -> Option<String> {
    let payload: Value = serde_json::from_str(body).ok()?;
    let message = payload.get("error")?.as_str()?;
    if message.is_empty() {
        return None;
    }
    Some(message.to_string())
}
