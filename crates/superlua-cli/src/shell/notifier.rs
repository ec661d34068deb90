//! Output notification for the shell.
//!
//! Commands report through a [`Notifier`] so the console can be swapped for
//! something that records messages.

use std::sync::Mutex;

/// Trait for handling shell output notifications
pub trait Notifier: Send + Sync {
    /// Handle regular output
    fn on_info(&self, content: &str);

    /// Handle error output
    fn on_error(&self, content: &str);
}

/// Default console-based notifier
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn on_info(&self, content: &str) {
        if !content.is_empty() {
            println!("{content}");
        }
    }

    fn on_error(&self, content: &str) {
        eprintln!("{content}");
    }
}

/// A message captured by [`RecordingNotifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Info(String),
    Error(String),
}

/// Notifier that keeps every message in memory.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<Message>>,
}

impl RecordingNotifier {
    /// Take all messages recorded so far.
    pub fn take(&self) -> Vec<Message> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Message>> {
        self.messages
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Notifier for RecordingNotifier {
    fn on_info(&self, content: &str) {
        self.lock().push(Message::Info(content.to_string()));
    }

    fn on_error(&self, content: &str) {
        self.lock().push(Message::Error(content.to_string()));
    }
}
