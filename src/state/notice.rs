//! Operator-facing notices and the presentation of controller outcomes.
//!
//! DESIGN
//! ======
//! Controllers never touch the page directly. They hand an [`Outcome`] to
//! [`present`], which turns it into at most one notice and, on success,
//! exactly one page reload through a [`Presenter`]. The browser presenter
//! lives with the notice tray component; tests use a recording one.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use super::editor::Outcome;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A single message shown in the notice tray.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: String,
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    fn new(level: NoticeLevel, text: String) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), level, text }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, text.into())
    }

    /// Error notice; the text is prefixed with `Error: `.
    pub fn error(message: impl std::fmt::Display) -> Self {
        Self::new(NoticeLevel::Error, format!("Error: {message}"))
    }
}

/// Most notices shown at once; older ones are dropped first.
pub const MAX_NOTICES: usize = 5;

/// How long a notice stays in the tray before it is dismissed.
pub const NOTICE_TTL_MS: u32 = 6000;

/// Notices currently on screen, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeState {
    pub items: Vec<Notice>,
}

impl NoticeState {
    /// Append `notice`, dropping the oldest beyond [`MAX_NOTICES`].
    pub fn push(&mut self, notice: Notice) {
        self.items.push(notice);
        let overflow = self.items.len().saturating_sub(MAX_NOTICES);
        self.items.drain(..overflow);
    }

    pub fn dismiss(&mut self, id: &str) {
        self.items.retain(|n| n.id != id);
    }
}

/// Where outcomes are shown.
pub trait Presenter {
    fn notify(&self, notice: Notice);

    /// Re-render the page from the backend.
    fn reload(&self);
}

impl Outcome {
    /// Notice describing this outcome; `None` for silent outcomes.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            Self::Created { kind, .. } => Some(Notice::success(format!("{} created successfully!", kind.label()))),
            Self::Updated { kind, .. } => Some(Notice::success(format!("{} updated successfully!", kind.label()))),
            Self::Deleted { kind, .. } => Some(Notice::success(format!("{} deleted successfully!", kind.label()))),
            Self::Failed(e) => Some(Notice::error(e.message())),
            Self::Aborted | Self::Busy => None,
        }
    }
}

/// Show `outcome`: its notice, then a reload if the backend changed.
pub fn present(presenter: &impl Presenter, outcome: &Outcome) {
    if let Some(notice) = outcome.notice() {
        presenter.notify(notice);
    }
    if outcome.is_success() {
        presenter.reload();
    }
}
