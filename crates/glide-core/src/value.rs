//! Interpolation system for tweenable values.
//!
//! This module provides the `Interpolate` trait and the concrete value types
//! the engine animates: scalars, 2D/3D vectors, and RGBA colors. The
//! `TweenValue` trait bundles the bounds a value type needs to flow through
//! the generic tween core.

use serde::{Deserialize, Serialize};

use crate::types::ValueKind;

/// Trait for types that can be interpolated between two values.
///
/// When `t = 0.0` the result equals `self`; when `t = 1.0` it equals `to`.
/// Values outside `[0.0, 1.0]` extrapolate, which overshoot easings rely on.
pub trait Interpolate: Sized {
    /// Interpolate between self and another value.
    fn interpolate(&self, to: &Self, t: f32) -> Self;
}

#[inline]
fn lerp_f32(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

impl Interpolate for f32 {
    fn interpolate(&self, to: &Self, t: f32) -> Self {
        lerp_f32(*self, *to, t)
    }
}

/// 2D vector value (screen positions, scales, UI offsets).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Uniform vector with every component set to `v`.
    pub fn splat(v: f32) -> Self {
        Self { x: v, y: v }
    }
}

impl Interpolate for Vec2 {
    fn interpolate(&self, to: &Self, t: f32) -> Self {
        Self {
            x: lerp_f32(self.x, to.x, t),
            y: lerp_f32(self.y, to.y, t),
        }
    }
}

/// 3D vector value (world positions, scales, Euler rotations).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Uniform vector with every component set to `v`.
    pub fn splat(v: f32) -> Self {
        Self { x: v, y: v, z: v }
    }
}

impl Interpolate for Vec3 {
    fn interpolate(&self, to: &Self, t: f32) -> Self {
        Self {
            x: lerp_f32(self.x, to.x, t),
            y: lerp_f32(self.y, to.y, t),
            z: lerp_f32(self.z, to.z, t),
        }
    }
}

/// RGBA color in linear space, components in `[0.0, 1.0]`.
///
/// Interpolation is per-component in linear space, which keeps gradients
/// perceptually smooth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from RGB components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Interpolate for Rgba {
    fn interpolate(&self, to: &Self, t: f32) -> Self {
        Self {
            r: lerp_f32(self.r, to.r, t),
            g: lerp_f32(self.g, to.g, t),
            b: lerp_f32(self.b, to.b, t),
            a: lerp_f32(self.a, to.a, t),
        }
    }
}

/// Bounds a value type needs to flow through the generic tween core.
///
/// The engine itself only swaps endpoints, snaps to them, and lerps between
/// them, so `Copy + Interpolate` covers the whole contract.
pub trait TweenValue: Interpolate + Copy + PartialEq + std::fmt::Debug + 'static {
    /// Runtime tag for the value shape, used for type-erased introspection.
    const KIND: ValueKind;
}

impl TweenValue for f32 {
    const KIND: ValueKind = ValueKind::Float;
}

impl TweenValue for Vec2 {
    const KIND: ValueKind = ValueKind::Vec2;
}

impl TweenValue for Vec3 {
    const KIND: ValueKind = ValueKind::Vec3;
}

impl TweenValue for Rgba {
    const KIND: ValueKind = ValueKind::Color;
}
