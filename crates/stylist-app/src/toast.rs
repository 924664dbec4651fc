//! Transient notifications that dismiss themselves

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Default display time for a toast
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);

/// Only the newest few toasts are kept
const MAX_TOASTS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub text: String,
    shown_at: Instant,
}

impl Toast {
    pub fn shown_at(&self) -> Instant {
        self.shown_at
    }
}

/// Visible toasts, oldest first
#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    duration: Duration,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_DURATION)
    }
}

impl ToastQueue {
    pub fn new(duration: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            duration,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn push(&mut self, kind: ToastKind, text: impl Into<String>) {
        self.push_at(kind, text, Instant::now());
    }

    pub fn push_at(&mut self, kind: ToastKind, text: impl Into<String>, now: Instant) {
        if self.toasts.len() == MAX_TOASTS {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast {
            kind,
            text: text.into(),
            shown_at: now,
        });
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.push(ToastKind::Info, text);
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.push(ToastKind::Success, text);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(ToastKind::Error, text);
    }

    /// Drop toasts older than the display duration. Returns true if any were removed.
    pub fn expire(&mut self, now: Instant) -> bool {
        let before = self.toasts.len();
        let duration = self.duration;
        self.toasts
            .retain(|t| now.saturating_duration_since(t.shown_at) < duration);
        self.toasts.len() != before
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.back()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_expires_after_duration() {
        let start = Instant::now();
        let mut queue = ToastQueue::new(Duration::from_millis(3000));
        queue.push_at(ToastKind::Success, "Item deleted", start);

        assert!(!queue.expire(start + Duration::from_millis(2999)));
        assert_eq!(queue.len(), 1);

        assert!(queue.expire(start + Duration::from_millis(3000)));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_toasts_expire_independently() {
        let start = Instant::now();
        let mut queue = ToastQueue::new(Duration::from_secs(3));
        queue.push_at(ToastKind::Info, "first", start);
        queue.push_at(ToastKind::Error, "second", start + Duration::from_secs(2));

        queue.expire(start + Duration::from_secs(4));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.latest().map(|t| t.text.as_str()), Some("second"));
    }

    #[test]
    fn test_queue_keeps_newest() {
        let mut queue = ToastQueue::default();
        for i in 0..6 {
            queue.info(format!("toast {}", i));
        }
        assert_eq!(queue.len(), MAX_TOASTS);
        assert_eq!(queue.iter().next().map(|t| t.text.as_str()), Some("toast 2"));
    }

    #[test]
    fn test_kind_helpers() {
        let mut queue = ToastQueue::default();
        queue.success("ok");
        assert_eq!(queue.latest().map(|t| t.kind), Some(ToastKind::Success));
        queue.error("bad");
        assert_eq!(queue.latest().map(|t| t.kind), Some(ToastKind::Error));
    }
}
