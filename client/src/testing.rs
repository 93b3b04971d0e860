//! Test doubles for the transport and notification boundaries.
//!
//! Shared by the unit tests of the pipeline and the resource API modules;
//! compiled only under `cfg(test)`.

use std::sync::{Arc, Mutex};

use crate::client::ApiClient;
use crate::http::{HttpRequest, HttpResponse};
use crate::notify::Notifier;
use crate::transport::{Transport, TransportError};

enum Script {
    Reply { status: u16, body: String },
    NoResponse(String),
    Request(String),
}

/// Transport that records every request and answers from a fixed script.
#[derive(Clone)]
pub(crate) struct ScriptedTransport {
    inner: Arc<Inner>,
}

struct Inner {
    script: Script,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    /// Always answer with the given status and body.
    pub(crate) fn replying(status: u16, body: &str) -> Self {
        Self::scripted(Script::Reply { status, body: body.to_string() })
    }

    /// Always fail as sent-but-unanswered.
    pub(crate) fn failing_no_response(detail: &str) -> Self {
        Self::scripted(Script::NoResponse(detail.to_string()))
    }

    /// Always fail before the request leaves the process.
    pub(crate) fn failing_request(detail: &str) -> Self {
        Self::scripted(Script::Request(detail.to_string()))
    }

    fn scripted(script: Script) -> Self {
        Self {
            inner: Arc::new(Inner { script, requests: Mutex::new(Vec::new()) }),
        }
    }

    /// Every request sent through this transport, in order.
    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.inner.requests.lock().unwrap().clone()
    }

    pub(crate) fn clone_handle(&self) -> Arc<dyn Transport> {
        Arc::new(self.clone())
    }
}

impl Transport for ScriptedTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self.inner.requests.lock().unwrap().push(request.clone());
        match &self.inner.script {
            Script::Reply { status, body } => Ok(HttpResponse { status: *status, body: body.clone() }),
            Script::NoResponse(detail) => Err(TransportError::NoResponse(detail.clone())),
            Script::Request(detail) => Err(TransportError::Request(detail.clone())),
        }
    }
}

/// Notifier that captures every message for assertions.
#[derive(Clone, Default)]
pub(crate) struct RecordingNotifier {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    pub(crate) fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub(crate) fn clone_handle(&self) -> Arc<dyn Notifier> {
        Arc::new(self.clone())
    }
}

impl Notifier for RecordingNotifier {
    fn error(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

/// Client over the given doubles with a fixed test base URL.
pub(crate) fn client_with(transport: &ScriptedTransport, notifier: &RecordingNotifier) -> ApiClient {
    ApiClient::with_parts("http://test.local", transport.clone_handle(), notifier.clone_handle())
}
