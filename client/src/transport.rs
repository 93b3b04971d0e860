//! Transport execution: turning an [`HttpRequest`] into an [`HttpResponse`].
//!
//! # Design
//! `Transport` is the seam between the response pipeline and the network.
//! The production implementation rides on `ureq` with status codes
//! returned as data (classification belongs to the pipeline, not the
//! transport) and the fixed 30-second ceiling applied agent-wide. Failures
//! are split into exactly two classes: the request went out and nothing
//! came back, or the request never left the process.

use std::time::Duration;

use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Per-call ceiling; a request still pending after this fails as
/// [`TransportError::NoResponse`].
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Failures below the HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The request was sent but no response arrived (connection refused,
    /// DNS failure, timeout, connection dropped mid-flight).
    #[error("{0}")]
    NoResponse(String),

    /// The request could not be constructed or handed to the socket.
    #[error("{0}")]
    Request(String),
}

/// Executes one HTTP round-trip.
pub trait Transport: Send + Sync {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Production transport backed by a shared `ureq` agent.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(REQUEST_TIMEOUT))
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut response = match request.method {
            HttpMethod::Get | HttpMethod::Delete => {
                let mut builder = match request.method {
                    HttpMethod::Get => self.agent.get(&request.url),
                    _ => self.agent.delete(&request.url),
                };
                for (name, value) in &request.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                builder.call().map_err(classify)?
            }
            HttpMethod::Post | HttpMethod::Put => {
                let mut builder = match request.method {
                    HttpMethod::Post => self.agent.post(&request.url),
                    _ => self.agent.put(&request.url),
                };
                for (name, value) in &request.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                match &request.body {
                    Some(body) => builder.send(body.as_bytes()).map_err(classify)?,
                    None => builder.send_empty().map_err(classify)?,
                }
            }
        };

        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string().unwrap_or_default();
        Ok(HttpResponse { status, body })
    }
}

/// Split a `ureq` failure into the two transport classes: URI/request
/// construction problems never reached the network, everything else is a
/// sent-but-unanswered request.
fn classify(err: ureq::Error) -> TransportError {
    match err {
        ureq::Error::BadUri(_) | ureq::Error::Http(_) => TransportError::Request(err.to_string()),
        other => TransportError::NoResponse(other.to_string()),
    }
}
