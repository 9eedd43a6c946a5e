#![allow(dead_code)]
//! Ease kinds and interpolation helpers.
//!
//! `EaseKind::apply` maps normalized progress through the named curve;
//! `interpolate` blends a scalar pair with it. Back and Elastic overshoot
//! outside [0, 1] by design of those curves.

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// Named interpolation curve applied to normalized progress.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum EaseKind {
    /// Constant velocity.
    #[default]
    Linear,
    QuadIn,
    QuadOut,
    QuadInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
    QuartIn,
    QuartOut,
    QuartInOut,
    QuintIn,
    QuintOut,
    QuintInOut,
    SineIn,
    SineOut,
    SineInOut,
    ExpoIn,
    ExpoOut,
    ExpoInOut,
    CircIn,
    CircOut,
    CircInOut,
    /// Pulls back before accelerating.
    BackIn,
    /// Overshoots the end before settling.
    BackOut,
    BackInOut,
    ElasticIn,
    ElasticOut,
    ElasticInOut,
    BounceIn,
    BounceOut,
    BounceInOut,
}

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Blend `from`..`to` at normalized progress `t` through `kind`.
#[inline]
pub fn interpolate(from: f32, to: f32, t: f32, kind: EaseKind) -> f32 {
    lerp_f32(from, to, kind.apply(t))
}

#[inline]
fn bounce_out(t: f32) -> f32 {
    const N1: f32 = 7.5625;
    const D1: f32 = 2.75;
    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let t = t - 1.5 / D1;
        N1 * t * t + 0.75
    } else if t < 2.5 / D1 {
        let t = t - 2.25 / D1;
        N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / D1;
        N1 * t * t + 0.984375
    }
}

#[inline]
fn elastic_in(t: f32) -> f32 {
    const C4: f32 = 2.0 * PI / 3.0;
    if t == 0.0 {
        0.0
    } else if t == 1.0 {
        1.0
    } else {
        -(2.0_f32.powf(10.0 * t - 10.0)) * ((t * 10.0 - 10.75) * C4).sin()
    }
}

#[inline]
fn elastic_out(t: f32) -> f32 {
    const C4: f32 = 2.0 * PI / 3.0;
    if t == 0.0 {
        0.0
    } else if t == 1.0 {
        1.0
    } else {
        2.0_f32.powf(-10.0 * t) * ((t * 10.0 - 0.75) * C4).sin() + 1.0
    }
}

impl EaseKind {
    /// Apply the curve to normalized progress `t`, clamped to [0, 1] first.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EaseKind::Linear => t,

            EaseKind::QuadIn => t * t,
            EaseKind::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            EaseKind::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (2.0 - 2.0 * t).powi(2) / 2.0
                }
            }

            EaseKind::CubicIn => t * t * t,
            EaseKind::CubicOut => 1.0 - (1.0 - t).powi(3),
            EaseKind::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (2.0 - 2.0 * t).powi(3) / 2.0
                }
            }

            EaseKind::QuartIn => t * t * t * t,
            EaseKind::QuartOut => 1.0 - (1.0 - t).powi(4),
            EaseKind::QuartInOut => {
                if t < 0.5 {
                    8.0 * t * t * t * t
                } else {
                    1.0 - (2.0 - 2.0 * t).powi(4) / 2.0
                }
            }

            EaseKind::QuintIn => t * t * t * t * t,
            EaseKind::QuintOut => 1.0 - (1.0 - t).powi(5),
            EaseKind::QuintInOut => {
                if t < 0.5 {
                    16.0 * t * t * t * t * t
                } else {
                    1.0 - (2.0 - 2.0 * t).powi(5) / 2.0
                }
            }

            EaseKind::SineIn => 1.0 - (t * PI / 2.0).cos(),
            EaseKind::SineOut => (t * PI / 2.0).sin(),
            EaseKind::SineInOut => -((PI * t).cos() - 1.0) / 2.0,

            EaseKind::ExpoIn => {
                if t == 0.0 {
                    0.0
                } else {
                    2.0_f32.powf(10.0 * t - 10.0)
                }
            }
            EaseKind::ExpoOut => {
                if t == 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f32.powf(-10.0 * t)
                }
            }
            EaseKind::ExpoInOut => {
                if t == 0.0 || t == 1.0 {
                    t
                } else if t < 0.5 {
                    2.0_f32.powf(20.0 * t - 10.0) / 2.0
                } else {
                    (2.0 - 2.0_f32.powf(10.0 - 20.0 * t)) / 2.0
                }
            }

            EaseKind::CircIn => 1.0 - (1.0 - t * t).sqrt(),
            EaseKind::CircOut => (1.0 - (t - 1.0) * (t - 1.0)).sqrt(),
            EaseKind::CircInOut => {
                if t < 0.5 {
                    (1.0 - (1.0 - (2.0 * t).powi(2)).sqrt()) / 2.0
                } else {
                    ((1.0 - (2.0 - 2.0 * t).powi(2)).sqrt() + 1.0) / 2.0
                }
            }

            EaseKind::BackIn => {
                const C1: f32 = 1.70158;
                const C3: f32 = C1 + 1.0;
                C3 * t * t * t - C1 * t * t
            }
            EaseKind::BackOut => {
                const C1: f32 = 1.70158;
                const C3: f32 = C1 + 1.0;
                1.0 + C3 * (t - 1.0).powi(3) + C1 * (t - 1.0).powi(2)
            }
            EaseKind::BackInOut => {
                const C1: f32 = 1.70158;
                const C2: f32 = C1 * 1.525;
                if t < 0.5 {
                    (2.0 * t).powi(2) * ((C2 + 1.0) * 2.0 * t - C2) / 2.0
                } else {
                    ((2.0 * t - 2.0).powi(2) * ((C2 + 1.0) * (2.0 * t - 2.0) + C2) + 2.0) / 2.0
                }
            }

            EaseKind::ElasticIn => elastic_in(t),
            EaseKind::ElasticOut => elastic_out(t),
            EaseKind::ElasticInOut => {
                const C5: f32 = 2.0 * PI / 4.5;
                if t == 0.0 || t == 1.0 {
                    t
                } else if t < 0.5 {
                    -(2.0_f32.powf(20.0 * t - 10.0) * ((20.0 * t - 11.125) * C5).sin()) / 2.0
                } else {
                    2.0_f32.powf(-20.0 * t + 10.0) * ((20.0 * t - 11.125) * C5).sin() / 2.0 + 1.0
                }
            }

            EaseKind::BounceIn => 1.0 - bounce_out(1.0 - t),
            EaseKind::BounceOut => bounce_out(t),
            EaseKind::BounceInOut => {
                if t < 0.5 {
                    (1.0 - bounce_out(1.0 - 2.0 * t)) / 2.0
                } else {
                    (1.0 + bounce_out(2.0 * t - 1.0)) / 2.0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32, eps: f32) {
        assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
    }

    const ALL: &[EaseKind] = &[
        EaseKind::Linear,
        EaseKind::QuadIn,
        EaseKind::QuadOut,
        EaseKind::QuadInOut,
        EaseKind::CubicIn,
        EaseKind::CubicOut,
        EaseKind::CubicInOut,
        EaseKind::QuartIn,
        EaseKind::QuartOut,
        EaseKind::QuartInOut,
        EaseKind::QuintIn,
        EaseKind::QuintOut,
        EaseKind::QuintInOut,
        EaseKind::SineIn,
        EaseKind::SineOut,
        EaseKind::SineInOut,
        EaseKind::ExpoIn,
        EaseKind::ExpoOut,
        EaseKind::ExpoInOut,
        EaseKind::CircIn,
        EaseKind::CircOut,
        EaseKind::CircInOut,
        EaseKind::BackIn,
        EaseKind::BackOut,
        EaseKind::BackInOut,
        EaseKind::ElasticIn,
        EaseKind::ElasticOut,
        EaseKind::ElasticInOut,
        EaseKind::BounceIn,
        EaseKind::BounceOut,
        EaseKind::BounceInOut,
    ];

    #[test]
    fn endpoints_are_exact() {
        for &kind in ALL {
            approx(kind.apply(0.0), 0.0, 1e-6);
            approx(kind.apply(1.0), 1.0, 1e-6);
        }
    }

    #[test]
    fn linear_midpoint() {
        approx(interpolate(0.0, 10.0, 0.5, EaseKind::Linear), 5.0, 1e-6);
    }

    #[test]
    fn quad_out_front_loads_motion() {
        assert!(EaseKind::QuadOut.apply(0.5) > 0.5);
        assert!(EaseKind::QuadIn.apply(0.5) < 0.5);
    }

    #[test]
    fn progress_is_clamped() {
        approx(EaseKind::CubicInOut.apply(-1.0), 0.0, 1e-6);
        approx(EaseKind::CubicInOut.apply(2.0), 1.0, 1e-6);
    }

    #[test]
    fn back_out_overshoots() {
        let mut peak = 0.0f32;
        for i in 0..=100 {
            peak = peak.max(EaseKind::BackOut.apply(i as f32 / 100.0));
        }
        assert!(peak > 1.0);
    }
}
