//! Notifications
//!
//! Every settled mutation is reported to a [`Notifier`]. Wording and
//! rendering (toasts, banners) belong to the view layer; this module only
//! says what happened.

use std::rc::Rc;

/// Which remote mutation a notification or state belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationKind {
    Create,
    Update,
    Delete,
}

impl MutationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MutationKind::Create => "create",
            MutationKind::Update => "update",
            MutationKind::Delete => "delete",
        }
    }
}

/// How a mutation settled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    Failed,
}

/// User-visible report of a settled mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: MutationKind,
    pub outcome: Outcome,
    /// Error text on failure
    pub detail: Option<String>,
}

impl Notification {
    pub fn success(kind: MutationKind) -> Self {
        Self { kind, outcome: Outcome::Succeeded, detail: None }
    }

    pub fn failure(kind: MutationKind, detail: impl Into<String>) -> Self {
        Self { kind, outcome: Outcome::Failed, detail: Some(detail.into()) }
    }

    pub fn is_error(&self) -> bool {
        self.outcome == Outcome::Failed
    }

    /// Translation key for the toast title
    pub fn title_key(&self) -> &'static str {
        match (self.outcome, self.kind) {
            (Outcome::Failed, _) => "error",
            (Outcome::Succeeded, MutationKind::Create) => "taskCreated",
            (Outcome::Succeeded, MutationKind::Update) => "taskUpdated",
            (Outcome::Succeeded, MutationKind::Delete) => "taskDeleted",
        }
    }
}

/// Receiver of mutation notifications
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

impl<N: Notifier + ?Sized> Notifier for Rc<N> {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification)
    }
}

/// Writes notifications to the log only
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        match &notification.detail {
            Some(detail) => log::warn!("[NOTIFY] {} failed: {}", notification.kind.as_str(), detail),
            None => log::info!("[NOTIFY] {} succeeded", notification.kind.as_str()),
        }
    }
}
