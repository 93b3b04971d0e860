//! The notification boundary: where failure messages go to be seen.
//!
//! Every classified failure produces exactly one call to
//! [`Notifier::error`] with the resolved user-facing message. The default
//! implementation emits a `tracing` error event; an embedding application
//! supplies its own implementation to route messages to its toast or
//! status-bar mechanism.

/// Sink for user-facing error messages.
pub trait Notifier: Send + Sync {
    /// Display one error-level message.
    fn error(&self, message: &str);
}

/// Default notifier: forwards messages to the `tracing` subscriber.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn error(&self, message: &str) {
        tracing::error!(target: "datagen_client::notify", "{message}");
    }
}
