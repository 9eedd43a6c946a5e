#![allow(dead_code)]
//! Per-target state: the pending queue and the running list.

use crate::action::Action;
use crate::ids::ActionId;
use crate::pool::Recycle;
use std::collections::VecDeque;

/// State for one animated target.
///
/// Invariants: `queue` and `current` are disjoint; if `current_action` is
/// set, the action it names is in `current`; at most one queued action per
/// target occupies its turn at any time.
#[derive(Debug)]
pub struct TweenData<T> {
    /// Queued actions awaiting activation, in submission order.
    pub queue: VecDeque<Action<T>>,
    /// All actions currently advancing: the activated queued action (if any)
    /// plus every immediate action. Order is not significant.
    pub current: Vec<Action<T>>,
    /// The queued action presently occupying the queue's turn.
    pub current_action: Option<ActionId>,
}

impl<T> TweenData<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(capacity),
            current: Vec::with_capacity(capacity),
            current_action: None,
        }
    }

    /// True once both collections are empty; an idle state is reclaimed by
    /// the update pass.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty() && self.current.is_empty()
    }

    pub fn position_current(&self, id: ActionId) -> Option<usize> {
        self.current.iter().position(|action| action.id == id)
    }

    pub fn position_queued(&self, id: ActionId) -> Option<usize> {
        self.queue.iter().position(|action| action.id == id)
    }
}

impl<T> Default for TweenData<T> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl<T> Recycle for TweenData<T> {
    fn recycle(&mut self) {
        self.queue.clear();
        self.current.clear();
        self.current_action = None;
    }
}
