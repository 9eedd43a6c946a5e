#![allow(dead_code)]
//! Identifiers and simple allocators for core entities.

use serde::{Deserialize, Serialize};

/// Identity grouping actions on one animated target. Caller-chosen or
/// synthesized by the engine when `run_actions` is given `None`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct TweenId(pub u64);

/// Handle to one submitted action, valid until the action completes or is
/// removed. Read it off the action before submitting if you need to cancel
/// it later.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ActionId(pub u32);

/// Synthesized tween ids live in the upper half of the u64 space so they can
/// never collide with caller-chosen ids drawn from the lower half.
const SYNTH_ID_BASE: u64 = 1 << 63;

/// Monotonic allocator for ActionId and synthesized TweenId.
/// Dense indices improve cache locality; IDs are opaque externally.
#[derive(Debug)]
pub struct IdAllocator {
    next_action: u32,
    next_tween: u64,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self {
            next_action: 0,
            next_tween: SYNTH_ID_BASE,
        }
    }
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc_action(&mut self) -> ActionId {
        let id = ActionId(self.next_action);
        self.next_action = self.next_action.wrapping_add(1);
        id
    }

    #[inline]
    pub fn alloc_tween(&mut self) -> TweenId {
        let id = TweenId(self.next_tween);
        self.next_tween = self.next_tween.wrapping_add(1);
        id
    }

    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_monotonic() {
        let mut alloc = IdAllocator::new();
        assert_eq!(alloc.alloc_action(), ActionId(0));
        assert_eq!(alloc.alloc_action(), ActionId(1));
        assert_eq!(alloc.alloc_tween(), TweenId(SYNTH_ID_BASE));
        assert_eq!(alloc.alloc_tween(), TweenId(SYNTH_ID_BASE + 1));
    }

    #[test]
    fn synth_ids_disjoint_from_caller_range() {
        let mut alloc = IdAllocator::new();
        let id = alloc.alloc_tween();
        assert!(id > TweenId(u64::MAX >> 1));
    }
}
