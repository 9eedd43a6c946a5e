#![allow(dead_code)]
//! Engine: data ownership and public API with the per-frame update driver.
//!
//! Methods:
//! - new, acquire_action, run_actions, try_remove_action,
//!   try_remove_all_actions, try_complete_all_actions, has_action, update
//!
//! Single-threaded and cooperative: every operation runs synchronously on
//! the caller's thread, with the embedding loop invoking `update(dt)` once
//! per tick.

use crate::action::Action;
use crate::config::Config;
use crate::ids::{ActionId, IdAllocator, TweenId};
use crate::map::IdentityMap;
use crate::outputs::{Outputs, TweenEvent};
use crate::pool::Pool;
use crate::state::TweenData;
use log::{debug, trace};

/// The tween scheduler, generic over the opaque target handle type `T`.
///
/// `T` is whatever the caller addresses animated objects by: an `Rc` of the
/// object itself, an entity id, an index into a host-side arena. The engine
/// only ever passes it to the accessors supplied per value channel.
#[derive(Debug)]
pub struct Engine<T> {
    // Owned data
    cfg: Config,
    ids: IdAllocator,
    targets: IdentityMap<T>,

    // Free lists
    data_pool: Pool<TweenData<T>>,
    action_pool: Pool<Action<T>>,

    // Per-tick outputs
    outputs: Outputs,
}

impl<T> Engine<T> {
    /// Create a new engine with the given config.
    pub fn new(cfg: Config) -> Self {
        Self {
            ids: IdAllocator::new(),
            targets: IdentityMap::new(),
            data_pool: Pool::with_capacity(cfg.data_pool_capacity),
            action_pool: Pool::with_capacity(cfg.action_pool_capacity),
            outputs: Outputs::default(),
            cfg,
        }
    }

    /// Get a clean, poolable action with a fresh id. Populate its fields and
    /// submit it through [`run_actions`](Self::run_actions).
    pub fn acquire_action(&mut self) -> Action<T> {
        let mut action = self
            .action_pool
            .acquire_with(|| Action::with_capacity(self.cfg.values_per_action));
        action.id = self.ids.alloc_action();
        action
    }

    /// Enqueue or activate a batch of actions for one target identity.
    ///
    /// Queued actions join the identity's pending queue; immediate actions
    /// start advancing right away, so their channels resolve from/to now.
    /// When `id` is `None` the engine synthesizes a fresh identity and
    /// returns it so later calls can address the same target state.
    ///
    /// Panics if an action was submitted without a target: that is a
    /// configuration bug, and silently skipping the action would animate
    /// nothing while looking like it worked.
    pub fn run_actions(&mut self, actions: Vec<Action<T>>, id: Option<TweenId>) -> TweenId {
        let id = id.unwrap_or_else(|| self.ids.alloc_tween());

        let index = match self.targets.index_of(id) {
            Ok(index) => index,
            Err(insert_at) => {
                let data = self
                    .data_pool
                    .acquire_with(|| TweenData::with_capacity(self.cfg.actions_per_target));
                self.targets.insert_at(insert_at, id, data);
                insert_at
            }
        };

        trace!("run_actions: {} action(s) for {:?}", actions.len(), id);

        let data = self.targets.at_mut(index);
        for mut action in actions {
            assert!(
                action.has_target(),
                "tween action has no target; assign Action::target before submitting"
            );
            if action.queued {
                data.queue.push_back(action);
            } else {
                action.resolve_values();
                data.current.push(action);
            }
        }

        id
    }

    /// Silently cancel one action: no terminal values, no completion
    /// callback. Returns false when the identity or the action is unknown,
    /// since callers routinely race against natural completion.
    pub fn try_remove_action(&mut self, id: TweenId, action: ActionId) -> bool {
        let Some(data) = self.targets.get_mut(id) else {
            return false;
        };

        if let Some(at) = data.position_current(action) {
            if data.current_action == Some(action) {
                data.current_action = None;
            }
            let removed = data.current.swap_remove(at);
            self.action_pool.release(removed);
            return true;
        }

        if let Some(at) = data.position_queued(action) {
            // Positional removal keeps the FIFO order of the rest.
            if let Some(removed) = data.queue.remove(at) {
                self.action_pool.release(removed);
                return true;
            }
        }

        false
    }

    /// Silently cancel everything scheduled for this identity. The emptied
    /// state stays in the map and is reclaimed by the next update pass.
    pub fn try_remove_all_actions(&mut self, id: TweenId) -> bool {
        let Some(data) = self.targets.get_mut(id) else {
            return false;
        };

        debug!(
            "remove_all: {:?} drops {} current, {} queued",
            id,
            data.current.len(),
            data.queue.len()
        );

        for action in data.current.drain(..) {
            self.action_pool.release(action);
        }
        for action in data.queue.drain(..) {
            self.action_pool.release(action);
        }
        // current_action, if set, was in `current`; just clear the slot.
        data.current_action = None;

        true
    }

    /// Drive every action for this identity straight to its terminal value,
    /// firing completion callbacks in submission order iff
    /// `fire_on_complete`. Queued actions that never took their turn are
    /// resolved first: forced completion is an implicit activation.
    pub fn try_complete_all_actions(&mut self, id: TweenId, fire_on_complete: bool) -> bool {
        let Some(data) = self.targets.get_mut(id) else {
            return false;
        };

        debug!(
            "complete_all: {:?} finishes {} current, {} queued (fire={})",
            id,
            data.current.len(),
            data.queue.len(),
            fire_on_complete
        );

        for mut action in data.current.drain(..) {
            action.apply_final();
            if fire_on_complete {
                action.fire_on_complete();
            }
            self.action_pool.release(action);
        }
        for mut action in data.queue.drain(..) {
            action.resolve_values();
            action.apply_final();
            if fire_on_complete {
                action.fire_on_complete();
            }
            self.action_pool.release(action);
        }
        data.current_action = None;

        true
    }

    /// True iff the identity is known and has anything pending or running.
    /// Purely observational.
    pub fn has_action(&self, id: TweenId) -> bool {
        self.targets.get(id).is_some_and(|data| !data.is_idle())
    }

    /// Advance all targets by one frame, writing interpolated values through
    /// the setters. Returns the events raised during the pass.
    ///
    /// Targets are visited in reverse index order over the sorted identity
    /// map, and running actions in reverse list order with swap-removal, so
    /// the entry being processed can delete itself without disturbing the
    /// rest of the pass.
    pub fn update(&mut self, dt: f32) -> &Outputs {
        self.outputs.clear();

        let mut i = self.targets.len();
        while i > 0 {
            i -= 1;
            let id = self.targets.id_at(i);
            let data = self.targets.at_mut(i);

            // Give the queue's head its turn if the slot is free.
            if data.current_action.is_none() {
                if let Some(mut action) = data.queue.pop_front() {
                    action.resolve_values();
                    data.current_action = Some(action.id);
                    self.outputs.push_event(TweenEvent::ActionActivated {
                        id,
                        action: action.id,
                    });
                    data.current.push(action);
                }
            }

            // Nothing queued and nothing running: recycle the state now.
            if data.current.is_empty() {
                let (_, data) = self.targets.remove_at(i);
                self.data_pool.release(data);
                self.outputs.push_event(TweenEvent::TargetReclaimed { id });
                continue;
            }

            let mut j = data.current.len();
            while j > 0 {
                j -= 1;
                let action = &mut data.current[j];
                action.cur_time += dt;

                if action.cur_time < action.duration {
                    action.apply_interpolated();
                    continue;
                }

                // Complete: exact terminal values, then notify.
                let mut completed = data.current.swap_remove(j);
                completed.apply_final();
                completed.fire_on_complete();
                self.outputs.push_event(TweenEvent::ActionCompleted {
                    id,
                    action: completed.id,
                });

                if data.current_action == Some(completed.id) {
                    data.current_action = None;
                    // Hand the turn over in the same pass that freed it. The
                    // successor resolves its values now and is first advanced
                    // next frame (it lands past `j`, unvisited this pass).
                    if let Some(mut next) = data.queue.pop_front() {
                        next.resolve_values();
                        data.current_action = Some(next.id);
                        self.outputs.push_event(TweenEvent::ActionActivated {
                            id,
                            action: next.id,
                        });
                        data.current.push(next);
                    }
                }

                self.action_pool.release(completed);
            }

            // The advancement loop may have drained the target entirely;
            // reclaim it within this pass rather than the next.
            if data.is_idle() {
                let (_, data) = self.targets.remove_at(i);
                self.data_pool.release(data);
                self.outputs.push_event(TweenEvent::TargetReclaimed { id });
            }
        }

        &self.outputs
    }

    /// Number of identities currently tracked. Useful for tests and tooling.
    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    /// Actions parked in the free list. Useful for tests and tooling.
    pub fn free_action_count(&self) -> usize {
        self.action_pool.free_count()
    }

    /// Target states parked in the free list. Useful for tests and tooling.
    pub fn free_data_count(&self) -> usize {
        self.data_pool.free_count()
    }
}
