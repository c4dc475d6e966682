//! Core identifiers and playback-control types.
//!
//! This module defines the fundamental types shared by the engine:
//! - `TweenId` / `ContainerId`: unique identifiers for runtime instances
//! - `TweenCategory`: coarse classification used for lookup and bulk cancel
//! - `LoopMode` / `Direction`: loop and playback-direction control
//! - `SnapOnDelete`: pose policy applied when a tween is cancelled

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Unique identifier for a tween instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TweenId(pub u64);

impl TweenId {
    /// Generate a new unique tween ID.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for TweenId {
    fn default() -> Self {
        Self::new()
    }
}

/// Unique identifier for a tween container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContainerId(pub u64);

impl ContainerId {
    /// Generate a new unique container ID.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ContainerId {
    fn default() -> Self {
        Self::new()
    }
}

/// Coarse classification of what a tween animates.
///
/// Used by target lookups and bulk cancellation: callers can restrict a scan
/// to one category, or pass `None` to match any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TweenCategory {
    Move,
    Scale,
    Rotate,
    Fade,
    Color,
    Custom,
}

impl Default for TweenCategory {
    fn default() -> Self {
        Self::Custom
    }
}

/// Shape of the value a tween interpolates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Float,
    Vec2,
    Vec3,
    Color,
}

/// What happens when a sequence reaches either end of its loop budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoopMode {
    /// Rewind to the first step and play forward again.
    #[default]
    Restart,
    /// Reverse playback direction at each end.
    Yoyo,
}

/// Direction a container walks its sequence steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    /// The opposite direction.
    pub fn flipped(&self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }

    /// Direction implied by the sign of a time scale.
    pub fn from_time_scale(time_scale: f32) -> Self {
        if time_scale < 0.0 {
            Self::Backward
        } else {
            Self::Forward
        }
    }
}

/// Pose applied to a tween when it is deleted mid-flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapOnDelete {
    /// Leave the last written value in place.
    #[default]
    None,
    /// Write the start pose before removal.
    Begin,
    /// Write the end pose before removal.
    End,
}

// Playback-control types are plain data and cross thread boundaries freely
// even though the runtime itself is single-threaded.
static_assertions::assert_impl_all!(TweenCategory: Send, Sync, Copy);
static_assertions::assert_impl_all!(LoopMode: Send, Sync, Copy);
static_assertions::assert_impl_all!(SnapOnDelete: Send, Sync, Copy);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_uniqueness() {
        let a = TweenId::new();
        let b = TweenId::new();
        assert_ne!(a, b);

        let c = ContainerId::new();
        let d = ContainerId::new();
        assert_ne!(c, d);
    }

    #[test]
    fn test_direction_flip() {
        assert_eq!(Direction::Forward.flipped(), Direction::Backward);
        assert_eq!(Direction::Backward.flipped(), Direction::Forward);
    }

    #[test]
    fn test_direction_from_time_scale() {
        assert_eq!(Direction::from_time_scale(1.0), Direction::Forward);
        assert_eq!(Direction::from_time_scale(0.0), Direction::Forward);
        assert_eq!(Direction::from_time_scale(-0.5), Direction::Backward);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(LoopMode::default(), LoopMode::Restart);
        assert_eq!(Direction::default(), Direction::Forward);
        assert_eq!(SnapOnDelete::default(), SnapOnDelete::None);
    }

    #[test]
    fn test_loop_mode_serialization() {
        let json = serde_json::to_string(&LoopMode::Yoyo).unwrap();
        assert_eq!(json, "\"yoyo\"");

        let parsed: LoopMode = serde_json::from_str("\"restart\"").unwrap();
        assert_eq!(parsed, LoopMode::Restart);
    }
}
