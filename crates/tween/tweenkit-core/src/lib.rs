#![allow(dead_code)]
//! Tweenkit Core (engine-agnostic)
//!
//! A time-driven property tween scheduler: register actions against a target
//! identity, call [`Engine::update`] once per frame, and interpolated values
//! flow back through caller-supplied accessors. The crate owns scheduling
//! only; what gets animated (position, color, volume...) is entirely the
//! accessors' business.
//!
//! ```no_run
//! use std::{cell::RefCell, rc::Rc};
//! use tweenkit_core::{ActionValue, Config, EaseKind, Engine};
//!
//! struct Sprite { x: f32 }
//! type Handle = Rc<RefCell<Sprite>>;
//!
//! let mut engine: Engine<Handle> = Engine::new(Config::default());
//! let sprite: Handle = Rc::new(RefCell::new(Sprite { x: 0.0 }));
//!
//! let mut action = engine.acquire_action();
//! action.target = Some(sprite.clone());
//! action.duration = 0.5;
//! action.queued = false;
//! action.push_value(
//!     ActionValue::new(|s: &mut Handle| s.borrow().x, |s, v| s.borrow_mut().x = v)
//!         .value(100.0)
//!         .ease(EaseKind::QuadOut),
//! );
//! let id = engine.run_actions(vec![action], None);
//!
//! // ... once per frame:
//! engine.update(1.0 / 60.0);
//! # let _ = id;
//! ```

pub mod action;
pub mod config;
pub mod ease;
pub mod engine;
pub mod ids;
pub mod map;
pub mod outputs;
pub mod pool;
pub mod state;

// Re-exports for consumers (hosts)
pub use action::{Action, ActionValue, CompleteFn, GetFn, SetFn};
pub use config::Config;
pub use ease::{interpolate, lerp_f32, EaseKind};
pub use engine::Engine;
pub use ids::{ActionId, TweenId};
pub use map::IdentityMap;
pub use outputs::{Outputs, TweenEvent};
pub use pool::{Pool, Recycle};
pub use state::TweenData;
