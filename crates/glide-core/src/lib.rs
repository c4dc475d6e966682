//! Tweening engine: interpolation jobs, parallel groups, and sequenced,
//! loopable timelines, driven by a host's per-frame update loop.
//!
//! This crate provides:
//! - **Tweens**: one interpolation job per target property, with delay,
//!   easing, pause, inversion, and safe mid-flight cancellation
//! - **Parallel groups**: tweens that play back together
//! - **Containers**: ordered sequences of groups with loop/yoyo control,
//!   direction inversion, and persistence
//! - **Manager**: per-frame fan-out, recycling, and target lookups
//!
//! # Architecture
//!
//! ```text
//! TweenManager
//!   └── TweenContainer (ordered sequence, loop/yoyo, signed time scale)
//!         └── ParallelGroup (one step; tweens run concurrently)
//!               └── Tween<V> (state machine; writes through a ValueSink)
//! ```
//!
//! Everything is single-threaded and cooperative: all mutation happens
//! synchronously inside the per-frame tick. Observers grow or cancel the
//! timeline mid-tick through a deferred scheduler, never by mutating a
//! collection being iterated; work added during a tick first advances on
//! the next one.
//!
//! # Example
//!
//! ```
//! use glide_core::easing::Easing;
//! use glide_core::manager::TweenManager;
//! use glide_core::target::{SharedValue, TargetHandle};
//! use glide_core::tween::Tween;
//! use glide_core::value::Vec2;
//!
//! let mut manager = TweenManager::new();
//! let position = SharedValue::shared(Vec2::ZERO);
//!
//! let slide = Tween::new(
//!     TargetHandle::from_sink(&position),
//!     Vec2::ZERO,
//!     Vec2::new(100.0, 0.0),
//!     2.0,
//! )
//! .with_easing(Easing::QuadOut);
//!
//! manager.start(slide.into_unit());
//! manager.update(1.0);
//! assert!(position.borrow().get().x > 50.0);
//! ```

pub mod container;
pub mod easing;
pub mod events;
pub mod group;
pub mod manager;
pub mod target;
pub mod tween;
pub mod types;
pub mod value;

pub use container::TweenContainer;
pub use easing::{Curve, Easing};
pub use events::{Placement, PendingInsert, TweenScheduler};
pub use group::ParallelGroup;
pub use manager::TweenManager;
pub use target::{FnSink, SharedValue, SinkId, TargetHandle, ValueSink};
pub use tween::{AnyTween, Tween};
pub use types::{
    ContainerId, Direction, LoopMode, SnapOnDelete, TweenCategory, TweenId, ValueKind,
};
pub use value::{Interpolate, Rgba, TweenValue, Vec2, Vec3};
