//! Transient user notifications

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
}

impl Notification {
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
        }
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.into(),
        }
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            title: title.into(),
        }
    }
}

/// Sink for notifications emitted by the session manager
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    fn notify(&self, notification: Notification);
}
