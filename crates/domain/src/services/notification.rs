//! Notification surface.
//!
//! Store mutations report their outcome through a [`NotificationSink`]. The
//! [`ToastBoard`] sink keeps at most one active notice: a new notice replaces
//! the current one, and a notice disappears on its own once the dismiss
//! interval has passed since it was shown.

use serde::Serialize;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Default time a notice stays visible.
pub const DEFAULT_DISMISS_AFTER: Duration = Duration::from_secs(3);

/// Kind of notice, which decides how it is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

impl std::fmt::Display for NoticeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NoticeKind::Success => write!(f, "success"),
            NoticeKind::Error => write!(f, "error"),
        }
    }
}

/// A user-facing message raised by an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Error,
        }
    }
}

/// Receives the notice produced by every store mutation.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Monotonic time source for dismissal.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// The notice currently on display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveNotice {
    #[serde(flatten)]
    pub notice: Notice,
    pub remaining_ms: u64,
}

struct Shown {
    notice: Notice,
    at: Instant,
}

/// Single-slot, auto-dismissing notice holder.
pub struct ToastBoard {
    slot: Mutex<Option<Shown>>,
    dismiss_after: Duration,
    clock: Box<dyn Clock>,
}

impl ToastBoard {
    pub fn new(dismiss_after: Duration) -> Self {
        Self::with_clock(dismiss_after, SystemClock)
    }

    pub fn with_clock(dismiss_after: Duration, clock: impl Clock + 'static) -> Self {
        Self {
            slot: Mutex::new(None),
            dismiss_after,
            clock: Box::new(clock),
        }
    }

    /// Returns the active notice, clearing it if it has expired.
    pub fn current(&self) -> Option<ActiveNotice> {
        let now = self.clock.now();
        let mut slot = self.lock();
        let elapsed = slot.as_ref().map(|shown| now.saturating_duration_since(shown.at))?;

        if elapsed >= self.dismiss_after {
            *slot = None;
            return None;
        }

        slot.as_ref().map(|shown| ActiveNotice {
            notice: shown.notice.clone(),
            remaining_ms: (self.dismiss_after - elapsed).as_millis() as u64,
        })
    }

    /// Manually dismisses the active notice. Returns whether one was showing.
    pub fn dismiss(&self) -> bool {
        let active = self.current().is_some();
        *self.lock() = None;
        active
    }

    fn lock(&self) -> MutexGuard<'_, Option<Shown>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ToastBoard {
    fn default() -> Self {
        Self::new(DEFAULT_DISMISS_AFTER)
    }
}

impl NotificationSink for ToastBoard {
    fn notify(&self, notice: Notice) {
        match notice.kind {
            NoticeKind::Success => info!(message = %notice.message, "Notice raised"),
            NoticeKind::Error => warn!(message = %notice.message, "Error notice raised"),
        }
        let at = self.clock.now();
        *self.lock() = Some(Shown { notice, at });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Clone)]
    struct ManualClock(Arc<Mutex<Instant>>);

    impl ManualClock {
        fn new() -> Self {
            Self(Arc::new(Mutex::new(Instant::now())))
        }

        fn advance(&self, by: Duration) {
            *self.0.lock().unwrap() += by;
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Instant {
            *self.0.lock().unwrap()
        }
    }

    #[test]
    fn test_notice_constructors() {
        assert_eq!(Notice::success("ok").kind, NoticeKind::Success);
        assert_eq!(Notice::error("bad").kind, NoticeKind::Error);
    }

    #[test]
    fn test_notice_kind_serialization() {
        let json = serde_json::to_value(Notice::error("No data")).unwrap();
        assert_eq!(json["kind"], "error");
        assert_eq!(json["message"], "No data");
    }

    #[test]
    fn test_board_starts_empty() {
        let board = ToastBoard::default();
        assert!(board.current().is_none());
        assert!(!board.dismiss());
    }

    #[test]
    fn test_new_notice_replaces_current() {
        let board = ToastBoard::default();
        board.notify(Notice::success("first"));
        board.notify(Notice::error("second"));

        let active = board.current().unwrap();
        assert_eq!(active.notice, Notice::error("second"));
    }

    #[test]
    fn test_notice_expires_after_interval() {
        let clock = ManualClock::new();
        let board = ToastBoard::with_clock(DEFAULT_DISMISS_AFTER, clock.clone());
        board.notify(Notice::success("Image uploaded successfully!"));

        clock.advance(Duration::from_millis(2999));
        let active = board.current().unwrap();
        assert_eq!(active.remaining_ms, 1);

        clock.advance(Duration::from_millis(1));
        assert!(board.current().is_none());
    }

    #[test]
    fn test_interval_restarts_for_replacement() {
        let clock = ManualClock::new();
        let board = ToastBoard::with_clock(DEFAULT_DISMISS_AFTER, clock.clone());
        board.notify(Notice::success("first"));
        clock.advance(Duration::from_secs(2));
        board.notify(Notice::success("second"));
        clock.advance(Duration::from_secs(2));

        assert_eq!(board.current().unwrap().notice.message, "second");
    }

    #[test]
    fn test_manual_dismiss() {
        let board = ToastBoard::default();
        board.notify(Notice::success("saved"));
        assert!(board.dismiss());
        assert!(board.current().is_none());
    }
}
