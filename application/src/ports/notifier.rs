//! Toast notification port
//!
//! Transient messages shown to the user after an action.

/// Shows success and error toasts
///
/// Implementations live in the presentation layer.
pub trait ToastNotifier: Send + Sync {
    fn success(&self, message: &str);

    fn error(&self, message: &str);
}

/// No-op notifier for when toasts are not displayed
pub struct NoToasts;

impl ToastNotifier for NoToasts {
    fn success(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}
