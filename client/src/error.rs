//! Error taxonomy for the API client.
//!
//! # Design
//! One variant per failure class, classified in this precedence: the server
//! answered with a non-2xx status (`Status`), the request went out but
//! nothing came back (`NoResponse`), the request never left the process
//! (`Request`), or the HTTP exchange succeeded but the body itself signals
//! failure (`Application`) or is not JSON (`Decode`). Every variant knows
//! the user-facing message shown for it, so the notification text and the
//! error value can never drift apart.

use crate::messages;

/// Errors returned by every API call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP success, but the body carried a non-empty `error` field.
    #[error("{0}")]
    Application(String),

    /// The server answered with a non-2xx status. `message` is already
    /// resolved through the status table in [`messages`].
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The request was sent but no response was received (connection,
    /// DNS, or timeout failure).
    #[error("no response received: {0}")]
    NoResponse(String),

    /// The request could not be constructed or handed to the transport.
    #[error("request could not be sent: {0}")]
    Request(String),

    /// HTTP success, but the body was not valid JSON.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// The message shown to the user for this failure.
    ///
    /// `NoResponse` always maps to the fixed network-failure string no
    /// matter what the transport reported; `Request` and `Decode` fall
    /// back to a generic message when the underlying detail is empty.
    pub fn notification(&self) -> String {
        match self {
            ApiError::Application(msg) => msg.clone(),
            ApiError::Status { message, .. } => message.clone(),
            ApiError::NoResponse(_) => messages::NETWORK_FAILED.to_string(),
            ApiError::Request(detail) | ApiError::Decode(detail) => {
                if detail.is_empty() {
                    messages::UNKNOWN.to_string()
                } else {
                    detail.clone()
                }
            }
        }
    }

    /// The HTTP status code, for callers branching on specific statuses.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
