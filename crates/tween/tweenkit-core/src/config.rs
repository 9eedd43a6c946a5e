#![allow(dead_code)]
//! Core configuration for tweenkit-core.

use serde::{Deserialize, Serialize};

/// Capacity hints for the engine's pools and per-record collections.
/// Keep this minimal; expand as needed without breaking API.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Free-list prewarm capacity for recycled target states.
    pub data_pool_capacity: usize,
    /// Free-list prewarm capacity for recycled actions.
    pub action_pool_capacity: usize,
    /// Initial queue/current capacity of a freshly built target state.
    pub actions_per_target: usize,
    /// Initial value-channel capacity of a freshly built action.
    pub values_per_action: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_pool_capacity: 25,
            action_pool_capacity: 25,
            actions_per_target: 6,
            values_per_action: 6,
        }
    }
}
