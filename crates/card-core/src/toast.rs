//! Stacking queue of live toasts.
//!
//! Time is passed in by the caller as an offset from any fixed origin, so the
//! queue works the same under a browser timer and a test clock.

use std::time::Duration;

use serde::Serialize;

use crate::notify::{Notice, ToastPosition};

/// Identifier of a toast within its queue. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ToastId(pub u64);

/// A notice currently on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub id: ToastId,
    pub notice: Notice,
    /// Offset at which the toast expires.
    pub deadline: Duration,
}

/// Live toasts in arrival order. No deduplication: identical notices stack.
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a notice received at `now`.
    pub fn push(&mut self, notice: Notice, now: Duration) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        let deadline = now + notice.auto_close;
        self.toasts.push(Toast {
            id,
            notice,
            deadline,
        });
        id
    }

    /// Remove a toast early. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    /// Remove and return every toast whose deadline is at or before `now`.
    pub fn expire(&mut self, now: Duration) -> Vec<Toast> {
        let (expired, live): (Vec<_>, Vec<_>) =
            self.toasts.drain(..).partition(|t| t.deadline <= now);
        self.toasts = live;
        expired
    }

    /// Live toasts anchored at `position`, oldest first.
    pub fn at(&self, position: ToastPosition) -> impl Iterator<Item = &Toast> {
        self.toasts
            .iter()
            .filter(move |t| t.notice.position == position)
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
