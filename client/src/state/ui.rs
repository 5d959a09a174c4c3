//! Local UI chrome state (toast notifications).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of page state so a toast raised
//! right before a navigation is still visible on the destination page.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Visual tone of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "toast--success",
            Self::Error => "toast--error",
            Self::Warning => "toast--warning",
            Self::Info => "toast--info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    /// Sequence number used to ignore stale auto-dismiss timers.
    pub seq: u64,
}

/// UI state shared through context.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub toast: Option<Toast>,
    pub toast_seq: u64,
}

impl UiState {
    /// Replace the visible toast and return its sequence number.
    pub fn push_toast(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.toast_seq += 1;
        self.toast = Some(Toast { kind, message: message.into(), seq: self.toast_seq });
        self.toast_seq
    }

    /// Hide the toast only if it is still the one identified by `seq`.
    pub fn expire_toast(&mut self, seq: u64) {
        if self.toast.as_ref().is_some_and(|t| t.seq == seq) {
            self.toast = None;
        }
    }

    pub fn dismiss_toast(&mut self) {
        self.toast = None;
    }
}
