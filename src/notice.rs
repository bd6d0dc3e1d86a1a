//! Transient notices posted by the editor
//!
//! The board keeps at most the latest notice. Auto-dismiss is driven by
//! the shell's clock: the board holds the post time and answers
//! visibility questions against a `now` the caller supplies. No timer
//! runs in here.

use std::time::{Duration, Instant};

/// How long a notice stays visible
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// Holds the latest notice and its post time
#[derive(Debug, Default)]
pub struct NoticeBoard {
    current: Option<(Notice, Instant)>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Post a notice now, replacing any previous one
    pub fn post(&mut self, notice: Notice) {
        self.post_at(notice, Instant::now());
    }

    /// Post with an explicit timestamp
    pub fn post_at(&mut self, notice: Notice, at: Instant) {
        self.current = Some((notice, at));
    }

    /// The notice still within its TTL at `now`, if any
    pub fn visible(&self, now: Instant) -> Option<&Notice> {
        self.current
            .as_ref()
            .filter(|(_, at)| now.saturating_duration_since(*at) < NOTICE_TTL)
            .map(|(notice, _)| notice)
    }

    /// The latest notice regardless of age
    pub fn latest(&self) -> Option<&Notice> {
        self.current.as_ref().map(|(notice, _)| notice)
    }

    /// Drop the notice once its TTL has elapsed
    pub fn sweep(&mut self, now: Instant) {
        if self.visible(now).is_none() {
            self.current = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_starts_empty() {
        let board = NoticeBoard::new();
        assert!(board.latest().is_none());
        assert!(board.visible(Instant::now()).is_none());
    }

    #[test]
    fn notice_is_visible_within_ttl() {
        let mut board = NoticeBoard::new();
        let t0 = Instant::now();
        board.post_at(Notice::success("Flow saved successfully!"), t0);

        assert!(board.visible(t0).is_some());
        assert!(board.visible(t0 + Duration::from_millis(2900)).is_some());
        assert!(board.visible(t0 + Duration::from_secs(4)).is_none());
    }

    #[test]
    fn sweep_clears_expired_notice() {
        let mut board = NoticeBoard::new();
        let t0 = Instant::now();
        board.post_at(Notice::error("nope"), t0);

        board.sweep(t0 + Duration::from_secs(1));
        assert!(board.latest().is_some());

        board.sweep(t0 + Duration::from_secs(4));
        assert!(board.latest().is_none());
    }

    #[test]
    fn posting_replaces_previous_notice() {
        let mut board = NoticeBoard::new();
        let t0 = Instant::now();
        board.post_at(Notice::error("first"), t0);
        board.post_at(Notice::success("second"), t0);

        let current = board.visible(t0).unwrap();
        assert_eq!(current.kind, NoticeKind::Success);
        assert_eq!(current.message, "second");
    }
}
