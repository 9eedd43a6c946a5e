#![allow(dead_code)]
//! Output contracts from the core engine.
//!
//! `update` returns the events raised during the pass. Completion closures
//! remain the in-band notification; events are the channel through which a
//! host reacts after `update` returns (resubmitting, removing, chaining),
//! since closures only ever see their target, never the engine.

use serde::{Deserialize, Serialize};

use crate::ids::{ActionId, TweenId};

/// Discrete signals emitted during one update pass.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum TweenEvent {
    /// A queued action took its turn and resolved its values.
    ActionActivated { id: TweenId, action: ActionId },
    /// An action reached its duration; terminal values are already written.
    ActionCompleted { id: TweenId, action: ActionId },
    /// A target ran out of actions and its state was recycled.
    TargetReclaimed { id: TweenId },
}

/// Events returned by `Engine::update()`, cleared at the top of each pass.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub events: Vec<TweenEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.events.clear();
    }

    #[inline]
    pub fn push_event(&mut self, event: TweenEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
