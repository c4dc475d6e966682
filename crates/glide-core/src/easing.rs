//! Easing functions for tween timing.
//!
//! This module implements the standard closed-form easing families
//! (sine, quadratic through quintic, exponential, circular, elastic,
//! back, bounce) plus custom cubic-bezier curves.
//!
//! Every easing maps a normalized progress `t` in `[0.0, 1.0]` to an
//! interpolation fraction, with `evaluate(0.0) == 0.0` and
//! `evaluate(1.0) == 1.0` exactly for all built-in kinds. The fraction may
//! leave `[0.0, 1.0]` mid-curve for overshooting kinds (elastic, back).
//!
//! # Usage
//!
//! ```
//! use glide_core::easing::{Curve, Easing};
//!
//! let ease = Easing::QuadOut;
//! let fraction = ease.evaluate(0.5);
//!
//! // A user-supplied curve wraps any f32 -> f32 closure.
//! let curve = Curve::custom(|t| t * t);
//! assert_eq!(curve.evaluate(0.5), 0.25);
//! ```

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;
use std::fmt;
use std::rc::Rc;

/// Built-in easing function selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Easing {
    /// Constant-rate interpolation (no easing).
    Linear,

    SineIn,
    SineOut,
    SineInOut,

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

    ExpoIn,
    ExpoOut,
    ExpoInOut,

    CircIn,
    CircOut,
    CircInOut,

    /// Spring-like oscillation settling on the endpoint.
    ElasticIn,
    ElasticOut,
    ElasticInOut,

    /// Overshoots slightly before settling.
    BackIn,
    BackOut,
    BackInOut,

    BounceIn,
    BounceOut,
    BounceInOut,

    /// Custom cubic bezier curve through control points
    /// `(x1, y1)` and `(x2, y2)`. x values must be in `[0, 1]`.
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },
}

impl Default for Easing {
    fn default() -> Self {
        Self::Linear
    }
}

impl Easing {
    /// Evaluate the easing at the given progress.
    ///
    /// Input is clamped to `[0.0, 1.0]`; the endpoints map to exactly
    /// `0.0` and `1.0` for every kind.
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        match self {
            Self::Linear => t,

            Self::SineIn => 1.0 - (t * PI / 2.0).cos(),
            Self::SineOut => (t * PI / 2.0).sin(),
            Self::SineInOut => -((PI * t).cos() - 1.0) / 2.0,

            Self::QuadIn => t * t,
            Self::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Self::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }

            Self::CubicIn => t * t * t,
            Self::CubicOut => 1.0 - (1.0 - t).powi(3),
            Self::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }

            Self::QuartIn => t.powi(4),
            Self::QuartOut => 1.0 - (1.0 - t).powi(4),
            Self::QuartInOut => {
                if t < 0.5 {
                    8.0 * t.powi(4)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(4) / 2.0
                }
            }

            Self::QuintIn => t.powi(5),
            Self::QuintOut => 1.0 - (1.0 - t).powi(5),
            Self::QuintInOut => {
                if t < 0.5 {
                    16.0 * t.powi(5)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(5) / 2.0
                }
            }

            Self::ExpoIn => (2.0_f32).powf(10.0 * t - 10.0),
            Self::ExpoOut => 1.0 - (2.0_f32).powf(-10.0 * t),
            Self::ExpoInOut => {
                if t < 0.5 {
                    (2.0_f32).powf(20.0 * t - 10.0) / 2.0
                } else {
                    (2.0 - (2.0_f32).powf(-20.0 * t + 10.0)) / 2.0
                }
            }

            Self::CircIn => 1.0 - (1.0 - t * t).sqrt(),
            Self::CircOut => (1.0 - (t - 1.0) * (t - 1.0)).sqrt(),
            Self::CircInOut => {
                if t < 0.5 {
                    (1.0 - (1.0 - (2.0 * t).powi(2)).sqrt()) / 2.0
                } else {
                    ((1.0 - (-2.0 * t + 2.0).powi(2)).sqrt() + 1.0) / 2.0
                }
            }

            Self::ElasticIn => {
                let c4 = (2.0 * PI) / 3.0;
                -(2.0_f32).powf(10.0 * t - 10.0) * ((t * 10.0 - 10.75) * c4).sin()
            }
            Self::ElasticOut => {
                let c4 = (2.0 * PI) / 3.0;
                (2.0_f32).powf(-10.0 * t) * ((t * 10.0 - 0.75) * c4).sin() + 1.0
            }
            Self::ElasticInOut => {
                let c5 = (2.0 * PI) / 4.5;
                if t < 0.5 {
                    -((2.0_f32).powf(20.0 * t - 10.0) * ((20.0 * t - 11.125) * c5).sin()) / 2.0
                } else {
                    ((2.0_f32).powf(-20.0 * t + 10.0) * ((20.0 * t - 11.125) * c5).sin()) / 2.0
                        + 1.0
                }
            }

            Self::BackIn => {
                let c1 = 1.70158;
                let c3 = c1 + 1.0;
                c3 * t * t * t - c1 * t * t
            }
            Self::BackOut => {
                let c1 = 1.70158;
                let c3 = c1 + 1.0;
                1.0 + c3 * (t - 1.0).powi(3) + c1 * (t - 1.0).powi(2)
            }
            Self::BackInOut => {
                let c1 = 1.70158_f32;
                let c2 = c1 * 1.525;
                if t < 0.5 {
                    ((2.0 * t).powi(2) * ((c2 + 1.0) * 2.0 * t - c2)) / 2.0
                } else {
                    ((2.0 * t - 2.0).powi(2) * ((c2 + 1.0) * (t * 2.0 - 2.0) + c2) + 2.0) / 2.0
                }
            }

            Self::BounceIn => 1.0 - bounce_out(1.0 - t),
            Self::BounceOut => bounce_out(t),
            Self::BounceInOut => {
                if t < 0.5 {
                    (1.0 - bounce_out(1.0 - 2.0 * t)) / 2.0
                } else {
                    (1.0 + bounce_out(2.0 * t - 1.0)) / 2.0
                }
            }

            Self::CubicBezier { x1, y1, x2, y2 } => cubic_bezier(*x1, *y1, *x2, *y2, t),
        }
    }

    /// Create a custom cubic bezier easing.
    ///
    /// # Panics
    /// Panics if `x1` or `x2` are outside `[0, 1]`.
    pub fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        assert!(
            (0.0..=1.0).contains(&x1) && (0.0..=1.0).contains(&x2),
            "Bezier x values must be in [0, 1]"
        );
        Self::CubicBezier { x1, y1, x2, y2 }
    }
}

/// Easing selection carried by a tween: a built-in kind or a user curve.
///
/// A custom curve is any `f32 -> f32` closure over normalized progress; it
/// should map `0.0` to `0.0` and `1.0` to `1.0`, but the engine does not
/// enforce it (the terminal tick snaps to the endpoint regardless).
#[derive(Clone)]
pub enum Curve {
    /// One of the built-in easing kinds.
    Preset(Easing),
    /// A user-supplied curve over normalized progress.
    Custom(Rc<dyn Fn(f32) -> f32>),
}

impl Curve {
    /// Wrap a closure as a custom curve.
    pub fn custom(f: impl Fn(f32) -> f32 + 'static) -> Self {
        Self::Custom(Rc::new(f))
    }

    /// Evaluate the curve at the given progress (clamped to `[0, 1]`).
    pub fn evaluate(&self, t: f32) -> f32 {
        match self {
            Self::Preset(easing) => easing.evaluate(t),
            Self::Custom(f) => f(t.clamp(0.0, 1.0)),
        }
    }
}

impl Default for Curve {
    fn default() -> Self {
        Self::Preset(Easing::Linear)
    }
}

impl From<Easing> for Curve {
    fn from(easing: Easing) -> Self {
        Self::Preset(easing)
    }
}

impl fmt::Debug for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Preset(easing) => f.debug_tuple("Preset").field(easing).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

fn bounce_out(t: f32) -> f32 {
    let n1 = 7.5625;
    let d1 = 2.75;

    if t < 1.0 / d1 {
        n1 * t * t
    } else if t < 2.0 / d1 {
        let t = t - 1.5 / d1;
        n1 * t * t + 0.75
    } else if t < 2.5 / d1 {
        let t = t - 2.25 / d1;
        n1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / d1;
        n1 * t * t + 0.984375
    }
}

/// Evaluate a cubic bezier timing curve at the given progress.
///
/// Uses Newton-Raphson iteration to find the curve parameter matching the
/// input x, then evaluates the y coordinate at that parameter.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, progress: f32) -> f32 {
    if progress <= 0.0 {
        return 0.0;
    }
    if progress >= 1.0 {
        return 1.0;
    }

    let t = solve_bezier_x(x1, x2, progress);
    bezier_axis(y1, y2, t)
}

/// Solve for the curve parameter whose x coordinate matches `target_x`.
fn solve_bezier_x(x1: f32, x2: f32, target_x: f32) -> f32 {
    let mut t = target_x;

    for _ in 0..8 {
        let x = bezier_axis(x1, x2, t) - target_x;
        if x.abs() < 1e-6 {
            break;
        }

        let dx = bezier_x_derivative(x1, x2, t);
        if dx.abs() < 1e-6 {
            break;
        }

        t -= x / dx;
        t = t.clamp(0.0, 1.0);
    }

    t
}

/// One-axis bezier evaluation: `3(1-t)²t·p1 + 3(1-t)t²·p2 + t³`.
#[inline]
fn bezier_axis(p1: f32, p2: f32, t: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;

    3.0 * mt2 * t * p1 + 3.0 * mt * t2 * p2 + t3
}

#[inline]
fn bezier_x_derivative(x1: f32, x2: f32, t: f32) -> f32 {
    let mt = 1.0 - t;
    3.0 * mt * mt * x1 + 6.0 * mt * t * (x2 - x1) + 3.0 * t * t * (1.0 - x2)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    const ALL_KINDS: &[Easing] = &[
        Easing::Linear,
        Easing::SineIn,
        Easing::SineOut,
        Easing::SineInOut,
        Easing::QuadIn,
        Easing::QuadOut,
        Easing::QuadInOut,
        Easing::CubicIn,
        Easing::CubicOut,
        Easing::CubicInOut,
        Easing::QuartIn,
        Easing::QuartOut,
        Easing::QuartInOut,
        Easing::QuintIn,
        Easing::QuintOut,
        Easing::QuintInOut,
        Easing::ExpoIn,
        Easing::ExpoOut,
        Easing::ExpoInOut,
        Easing::CircIn,
        Easing::CircOut,
        Easing::CircInOut,
        Easing::ElasticIn,
        Easing::ElasticOut,
        Easing::ElasticInOut,
        Easing::BackIn,
        Easing::BackOut,
        Easing::BackInOut,
        Easing::BounceIn,
        Easing::BounceOut,
        Easing::BounceInOut,
    ];

    #[test]
    fn test_endpoints_are_exact() {
        for kind in ALL_KINDS {
            assert_eq!(kind.evaluate(0.0), 0.0, "{kind:?} at 0");
            assert_eq!(kind.evaluate(1.0), 1.0, "{kind:?} at 1");
        }
    }

    #[test]
    fn test_linear_is_identity() {
        assert!(approx_eq(Easing::Linear.evaluate(0.25), 0.25));
        assert!(approx_eq(Easing::Linear.evaluate(0.5), 0.5));
        assert!(approx_eq(Easing::Linear.evaluate(0.75), 0.75));
    }

    #[test]
    fn test_quad_in_starts_slow() {
        let early = Easing::QuadIn.evaluate(0.25);
        assert!(early < 0.25);
        assert!(approx_eq(early, 0.0625));
    }

    #[test]
    fn test_quad_out_starts_fast() {
        let early = Easing::QuadOut.evaluate(0.25);
        assert!(early > 0.25);
        assert!(approx_eq(early, 0.4375));
    }

    #[test]
    fn test_in_out_symmetry() {
        for kind in [Easing::SineInOut, Easing::QuadInOut, Easing::CubicInOut] {
            assert!(approx_eq(kind.evaluate(0.5), 0.5), "{kind:?} midpoint");
            let early = kind.evaluate(0.25);
            let late = kind.evaluate(0.75);
            assert!(approx_eq(early + late, 1.0), "{kind:?} symmetry");
        }
    }

    #[test]
    fn test_back_overshoots() {
        // BackOut exceeds 1.0 shortly after the start of its tail.
        let v = Easing::BackOut.evaluate(0.8);
        assert!(v > 1.0);
    }

    #[test]
    fn test_elastic_oscillates() {
        // ElasticIn dips negative before rising to the endpoint.
        let mut saw_negative = false;
        for i in 1..20 {
            if Easing::ElasticIn.evaluate(i as f32 / 20.0) < 0.0 {
                saw_negative = true;
            }
        }
        assert!(saw_negative);
    }

    #[test]
    fn test_bounce_out_monotone_peaks() {
        // Each bounce segment ends at its local contact point below 1.0.
        let v = Easing::BounceOut.evaluate(0.5);
        assert!(v > 0.0 && v < 1.0);
        assert_eq!(Easing::BounceOut.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_clamping() {
        assert_eq!(Easing::QuadIn.evaluate(-0.5), 0.0);
        assert_eq!(Easing::QuadIn.evaluate(1.5), 1.0);
    }

    #[test]
    fn test_custom_bezier() {
        // A bezier with control points on the diagonal is linear.
        let linear = Easing::cubic_bezier(0.25, 0.25, 0.75, 0.75);
        assert!(approx_eq(linear.evaluate(0.5), 0.5));

        // Material-style standard curve stays within bounds at the midpoint.
        let standard = Easing::cubic_bezier(0.4, 0.0, 0.2, 1.0);
        let mid = standard.evaluate(0.5);
        assert!(mid > 0.5 && mid < 1.0);
    }

    #[test]
    #[should_panic(expected = "Bezier x values must be in [0, 1]")]
    fn test_invalid_bezier_x() {
        Easing::cubic_bezier(-0.1, 0.0, 0.5, 1.0);
    }

    #[test]
    fn test_curve_custom_closure() {
        let curve = Curve::custom(|t| t * t);
        assert!(approx_eq(curve.evaluate(0.5), 0.25));
        // Input clamped before the closure sees it.
        assert!(approx_eq(curve.evaluate(2.0), 1.0));
    }

    #[test]
    fn test_curve_from_preset() {
        let curve: Curve = Easing::QuadOut.into();
        assert!(approx_eq(curve.evaluate(0.25), 0.4375));
    }

    #[test]
    fn test_easing_serialization() {
        let json = serde_json::to_string(&Easing::ElasticOut).unwrap();
        let parsed: Easing = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Easing::ElasticOut);

        let bezier = Easing::cubic_bezier(0.4, 0.0, 0.2, 1.0);
        let json = serde_json::to_string(&bezier).unwrap();
        let parsed: Easing = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, bezier);
    }
}
