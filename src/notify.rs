//! Toast notifications surfaced after mutations.

use std::sync::Mutex;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Error,
            message: message.into(),
        }
    }
}

/// Where pages send their toasts. The front end decides how to show them.
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}

/// Emits toasts as tracing events.
#[derive(Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, toast: Toast) {
        match toast.level {
            ToastLevel::Success => tracing::info!(toast = %toast.message),
            ToastLevel::Error => tracing::error!(toast = %toast.message),
        }
    }
}

/// Records toasts for later display (the console drains them after each
/// command) and for assertions in tests.
#[derive(Default)]
pub struct MemoryNotifier {
    toasts: Mutex<Vec<Toast>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return everything recorded so far.
    pub fn drain(&self) -> Vec<Toast> {
        std::mem::take(&mut *self.lock())
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Toast>> {
        self.toasts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, toast: Toast) {
        self.lock().push(toast);
    }
}
