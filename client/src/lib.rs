//! Typed HTTP client for the data-generation task service.
//!
//! # Overview
//! Wraps the service's JSON-over-HTTP API (rooted at `/api`) in three
//! resource modules — datasources, tasks, and rule templates — sharing one
//! explicitly constructed [`ApiClient`]. Every call returns either the
//! decoded response body or a classified [`ApiError`], and every failure
//! fires exactly one message through the [`notify::Notifier`] boundary.
//!
//! # Design
//! - `ApiClient` holds the base URL plus shared transport and notifier
//!   handles; resource APIs receive clones, so there is no process-wide
//!   mutable configuration.
//! - The transport boundary ([`transport::Transport`]) moves plain-data
//!   requests and responses, keeping the response pipeline testable
//!   without sockets.
//! - Failures are classified into an explicit taxonomy ([`ApiError`]) and
//!   messages come from a finite status table ([`messages`]); a body
//!   `error` field inside an HTTP success is a failure too.
//! - Nothing is retried, cached, or deduplicated; calls are independent.

pub mod client;
pub mod datasource;
pub mod error;
pub mod http;
pub mod messages;
pub mod notify;
pub mod routes;
pub mod task;
pub mod template;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{ApiClient, API_PREFIX};
pub use datasource::DatasourceApi;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use notify::{LogNotifier, Notifier};
pub use routes::{resolve, View, ROUTES};
pub use task::TaskApi;
pub use template::TemplateApi;
pub use transport::{Transport, TransportError, UreqTransport, REQUEST_TIMEOUT};
