//! User-facing failure messages and the status-to-message table.
//!
//! # Design
//! The mapping from HTTP status to message is a single explicit `match`
//! with a defined default, so every reachable status has exactly one
//! message and adding a case is a one-line change. 400 and the default arm
//! prefer the server's own `error` field when the body carries one; the
//! fixed-string statuses ignore the body entirely.

/// 400 without a usable body error.
pub const BAD_REQUEST: &str = "bad request parameters";
/// 401.
pub const UNAUTHORIZED: &str = "unauthorized access";
/// 403.
pub const FORBIDDEN: &str = "forbidden";
/// 404.
pub const NOT_FOUND: &str = "resource not found";
/// 500.
pub const INTERNAL_ERROR: &str = "internal server error";
/// Request sent, no response received.
pub const NETWORK_FAILED: &str = "network connection failed, check network settings";
/// Failure with no message of its own.
pub const UNKNOWN: &str = "unknown error";

/// Select the message for a non-2xx status.
///
/// `body_error` is the `error` field extracted from the response body, if
/// any; only 400 and unlisted statuses use it.
pub fn for_status(status: u16, body_error: Option<&str>) -> String {
    match status {
        400 => body_error.unwrap_or(BAD_REQUEST).to_string(),
        401 => UNAUTHORIZED.to_string(),
        403 => FORBIDDEN.to_string(),
        404 => NOT_FOUND.to_string(),
        500 => INTERNAL_ERROR.to_string(),
        status => match body_error {
            Some(msg) => msg.to_string(),
            None => format!("request failed ({status})"),
        },
    }
}
