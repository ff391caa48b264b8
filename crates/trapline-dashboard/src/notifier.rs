//! Sinks for blocking, user-facing notifications.

use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};

/// Delivers a message the user must acknowledge.
///
/// Used for save failures and rejected drafts; fetch failures go to the
/// state's inline error banner instead.
pub trait Notifier: Send + Sync {
    /// Shows `message` to the user.
    fn notify(&self, message: &str);
}

/// Logs notifications at `warn`. The default when no surface is attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        tracing::warn!(notice = %message, "User notification");
    }
}

/// Writes notifications to standard error.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, message: &str) {
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(stderr, "error: {message}");
    }
}

/// Holds the latest notification until a page view takes it.
///
/// Cheap to clone; clones share the pending slot.
#[derive(Debug, Clone, Default)]
pub struct FlashNotifier {
    pending: Arc<Mutex<Option<String>>>,
}

impl FlashNotifier {
    /// Creates an empty notifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns the pending notification, if any.
    pub fn take(&self) -> Option<String> {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

impl Notifier for FlashNotifier {
    fn notify(&self, message: &str) {
        *self.pending.lock().unwrap_or_else(PoisonError::into_inner) = Some(message.to_string());
    }
}

/// Keeps every notification, in order. Useful in tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifications received so far.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}
