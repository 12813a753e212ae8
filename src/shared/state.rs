use dioxus::prelude::*;

/// One-shot message carried across a navigation, e.g. the backend's
/// signup confirmation shown on the login page. Lives in memory only.
#[derive(Clone, Copy, PartialEq)]
pub struct Flash(Signal<Option<String>>);

impl Flash {
    pub fn new(initial: Option<String>) -> Self {
        Self(Signal::new(initial))
    }

    pub fn set(&mut self, message: String) {
        self.0.set(Some(message));
    }

    /// Returns the pending message and clears it.
    pub fn take(&mut self) -> Option<String> {
        if self.0.peek().is_none() {
            return None;
        }
        self.0.write().take()
    }
}
