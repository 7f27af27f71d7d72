//! Versioned toast notification state.
//!
//! DESIGN
//! ======
//! Every `post` bumps `seq`, so the auto-hide countdown can capture the
//! version it was started for and a later message supersedes it without any
//! message queue. Visibility changes alone (dismiss/expire) never bump the
//! version.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Display state for the transient upload notification.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastState {
    /// Version counter, incremented on every `post`.
    pub seq: u64,
    /// Whether the toast is currently shown.
    pub visible: bool,
    /// Message body for the current version.
    pub message: String,
}

impl ToastState {
    /// Show a new message, replacing any current one outright.
    pub fn post(&mut self, message: impl Into<String>) {
        self.seq += 1;
        self.visible = true;
        self.message = message.into();
    }

    /// Hide immediately (manual close or stale-toast clearing).
    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    /// Hide only if `seq` is still the current version.
    ///
    /// Called by the auto-hide countdown; a `post` that happened after the
    /// countdown started leaves the newer message visible.
    pub fn expire(&mut self, seq: u64) {
        if self.seq == seq {
            self.visible = false;
        }
    }
}
