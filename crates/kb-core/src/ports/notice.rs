use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Info,
    Error,
}

/// Toast-style message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    /// Offer a retry affordance.
    pub retryable: bool,
    /// Let the user close the notice.
    pub dismissable: bool,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
            retryable: false,
            dismissable: true,
        }
    }

    /// Profile could not be loaded; the user may retry.
    pub fn load_failed(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
            retryable: true,
            dismissable: false,
        }
    }

    /// A step could not be saved; the form stays available.
    pub fn save_failed(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
            retryable: false,
            dismissable: true,
        }
    }
}

pub trait NoticePort: Send + Sync {
    fn notify(&self, notice: Notice);
}
