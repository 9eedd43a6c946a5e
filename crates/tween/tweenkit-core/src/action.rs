#![allow(dead_code)]
//! Action and per-channel value data model.
//!
//! An `Action<T>` bundles one or more `ActionValue<T>` channels driven by a
//! shared clock against one opaque target handle. The engine never inspects
//! the target beyond handing it to the caller-supplied accessors.

use crate::ease::{interpolate, EaseKind};
use crate::ids::ActionId;
use crate::pool::Recycle;
use std::fmt;

const NO_TARGET: &str = "tween action has no target; assign Action::target before submitting";

/// Caller-supplied property reader.
pub type GetFn<T> = Box<dyn FnMut(&mut T) -> f32>;
/// Caller-supplied property writer.
pub type SetFn<T> = Box<dyn FnMut(&mut T, f32)>;
/// Completion notification, invoked with the action's target.
pub type CompleteFn<T> = Box<dyn FnMut(&mut T)>;

/// One interpolated scalar channel within an action.
///
/// `from_value`/`to_value` are resolved exactly once, at the moment the
/// owning action activates (immediately for non-queued actions, at its
/// queue turn otherwise), never at authoring time.
pub struct ActionValue<T> {
    /// Displacement when `is_relative`, absolute end value otherwise.
    pub value: f32,
    /// Start of the interpolation, captured from the getter at activation.
    pub from_value: f32,
    /// Resolved end of the interpolation.
    pub to_value: f32,
    /// Interpret `value` as an offset from the captured start.
    pub is_relative: bool,
    /// Curve applied to normalized progress.
    pub ease: EaseKind,
    on_get: GetFn<T>,
    on_set: SetFn<T>,
}

impl<T> ActionValue<T> {
    /// Build a channel from its accessor pair. Both accessors are mandatory;
    /// requiring them here is what makes a half-configured channel
    /// unrepresentable.
    pub fn new(
        on_get: impl FnMut(&mut T) -> f32 + 'static,
        on_set: impl FnMut(&mut T, f32) + 'static,
    ) -> Self {
        Self {
            value: 0.0,
            from_value: 0.0,
            to_value: 0.0,
            is_relative: true,
            ease: EaseKind::Linear,
            on_get: Box::new(on_get),
            on_set: Box::new(on_set),
        }
    }

    /// Set the displacement or absolute end value.
    pub fn value(mut self, value: f32) -> Self {
        self.value = value;
        self
    }

    /// Choose relative (offset) versus absolute end-value semantics.
    pub fn relative(mut self, is_relative: bool) -> Self {
        self.is_relative = is_relative;
        self
    }

    /// Choose the interpolation curve.
    pub fn ease(mut self, ease: EaseKind) -> Self {
        self.ease = ease;
        self
    }

    /// Capture the start from the getter and resolve the end.
    fn resolve(&mut self, target: &mut T) {
        self.from_value = (self.on_get)(target);
        self.to_value = if self.is_relative {
            self.value + self.from_value
        } else {
            self.value
        };
    }

    #[inline]
    fn set(&mut self, target: &mut T, value: f32) {
        (self.on_set)(target, value);
    }
}

impl<T> fmt::Debug for ActionValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionValue")
            .field("value", &self.value)
            .field("from_value", &self.from_value)
            .field("to_value", &self.to_value)
            .field("is_relative", &self.is_relative)
            .field("ease", &self.ease)
            .finish_non_exhaustive()
    }
}

/// A bundle of simultaneously driven value channels sharing one clock and
/// one target.
///
/// Acquire from [`Engine::acquire_action`](crate::Engine::acquire_action),
/// populate the public fields, then submit through
/// [`Engine::run_actions`](crate::Engine::run_actions). After submission the
/// engine owns the action; keep its `id` around for later removal.
pub struct Action<T> {
    /// Pool-stable handle assigned at acquisition.
    pub id: ActionId,
    /// Opaque target handle passed through to every accessor call.
    pub target: Option<T>,
    /// The interpolated channels; all driven by the same clock.
    pub values: Vec<ActionValue<T>>,
    /// Elapsed time in the action's own clock.
    pub cur_time: f32,
    /// Total time; the action is complete once `cur_time >= duration`.
    pub duration: f32,
    /// Wait behind prior queued actions on the same target, or run
    /// concurrently with whatever else is active.
    pub queued: bool,
    /// Fires exactly once at normal or forced completion, never at removal.
    pub on_complete: Option<CompleteFn<T>>,
}

impl<T> Action<T> {
    pub(crate) fn with_capacity(values: usize) -> Self {
        Self {
            id: ActionId(0),
            target: None,
            values: Vec::with_capacity(values),
            cur_time: 0.0,
            duration: 0.0,
            queued: true,
            on_complete: None,
        }
    }

    /// Append a value channel.
    pub fn push_value(&mut self, value: ActionValue<T>) -> &mut Self {
        self.values.push(value);
        self
    }

    #[inline]
    pub(crate) fn has_target(&self) -> bool {
        self.target.is_some()
    }

    /// Resolve every channel's from/to against the current target state.
    /// Called exactly once per submission, at activation.
    pub(crate) fn resolve_values(&mut self) {
        let target = self.target.as_mut().expect(NO_TARGET);
        for value in &mut self.values {
            value.resolve(target);
        }
    }

    /// Write the interpolated value for the current clock into every channel.
    pub(crate) fn apply_interpolated(&mut self) {
        let t = self.cur_time / self.duration;
        let target = self.target.as_mut().expect(NO_TARGET);
        for value in &mut self.values {
            let eased = interpolate(value.from_value, value.to_value, t, value.ease);
            value.set(target, eased);
        }
    }

    /// Write the exact terminal value into every channel, so completion is
    /// immune to floating-point drift accumulated during interpolation.
    pub(crate) fn apply_final(&mut self) {
        let target = self.target.as_mut().expect(NO_TARGET);
        for value in &mut self.values {
            let to = value.to_value;
            value.set(target, to);
        }
    }

    pub(crate) fn fire_on_complete(&mut self) {
        if let Some(on_complete) = self.on_complete.as_mut() {
            let target = self.target.as_mut().expect(NO_TARGET);
            on_complete(target);
        }
    }
}

impl<T> Recycle for Action<T> {
    fn recycle(&mut self) {
        // The values vec keeps its capacity; clearing it drops the boxed
        // accessors so no caller references survive the release.
        self.values.clear();
        self.target = None;
        self.on_complete = None;
        self.cur_time = 0.0;
        self.duration = 0.0;
        self.queued = true;
    }
}

impl<T> fmt::Debug for Action<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("id", &self.id)
            .field("values", &self.values)
            .field("cur_time", &self.cur_time)
            .field("duration", &self.duration)
            .field("queued", &self.queued)
            .field("has_target", &self.target.is_some())
            .field("has_on_complete", &self.on_complete.is_some())
            .finish()
    }
}
