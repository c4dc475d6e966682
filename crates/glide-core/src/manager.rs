//! The tween manager: per-frame fan-out and container recycling.
//!
//! The manager owns every [`TweenContainer`] in flight. The host calls
//! [`TweenManager::update`] once per frame with the frame delta; the
//! manager ticks each container and recycles the ones that report
//! genuinely finished (persistent containers never do) or were marked for
//! deletion.
//!
//! It also offers the host-facing lookups: "is this object currently being
//! tweened" and bulk cancellation by target.
//!
//! # Usage
//!
//! ```
//! use glide_core::manager::TweenManager;
//! use glide_core::target::{SharedValue, TargetHandle};
//! use glide_core::tween::Tween;
//!
//! let mut manager = TweenManager::new();
//! let position = SharedValue::shared(0.0_f32);
//!
//! let tween = Tween::new(TargetHandle::from_sink(&position), 0.0, 100.0, 1.0);
//! manager.start(tween.into_unit());
//!
//! manager.update(0.5); // ~half way
//! assert_eq!(position.borrow().get(), 50.0);
//! ```

use std::collections::HashMap;

use crate::container::TweenContainer;
use crate::target::SinkId;
use crate::tween::AnyTween;
use crate::types::{ContainerId, LoopMode, TweenCategory};

/// Owns and ticks every active container.
#[derive(Debug, Default)]
pub struct TweenManager {
    containers: HashMap<ContainerId, TweenContainer>,
    host_paused: bool,
}

impl TweenManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty container ready for groups to be appended.
    pub fn create_container(
        &mut self,
        num_loops: i32,
        loop_mode: LoopMode,
        time_scale: f32,
    ) -> ContainerId {
        let mut container = TweenContainer::new(num_loops, loop_mode, time_scale);
        container.set_host_paused(self.host_paused);
        let id = container.id();
        self.containers.insert(id, container);
        id
    }

    /// Start a single tween in a fresh container, adopting the tween's
    /// loop request.
    pub fn start(&mut self, unit: Box<dyn AnyTween>) -> ContainerId {
        let (num_loops, loop_mode) = unit.loop_settings();
        let id = self.create_container(num_loops, loop_mode, 1.0);
        if let Some(container) = self.containers.get_mut(&id) {
            container.append(unit);
        }
        id
    }

    pub fn container(&self, id: ContainerId) -> Option<&TweenContainer> {
        self.containers.get(&id)
    }

    pub fn container_mut(&mut self, id: ContainerId) -> Option<&mut TweenContainer> {
        self.containers.get_mut(&id)
    }

    /// Tick every container by `dt` seconds and recycle finished ones.
    pub fn update(&mut self, dt: f32) {
        self.containers.retain(|_, container| !container.tick(dt));
    }

    /// Whether any container has a mid-flight tween writing to `sink`.
    pub fn is_tweening(&mut self, sink: SinkId, category: Option<TweenCategory>) -> bool {
        self.containers
            .values_mut()
            .any(|container| container.find_active_tween_for_target(sink, category).is_some())
    }

    /// Delete every tween writing to `sink` across all containers.
    pub fn cancel_all_for_target(&mut self, sink: SinkId, category: Option<TweenCategory>) {
        for container in self.containers.values_mut() {
            container.delete_by_target(sink, category);
        }
    }

    /// Gate ticking for tweens that don't opt into running while the host
    /// application is paused.
    pub fn set_host_paused(&mut self, host_paused: bool) {
        self.host_paused = host_paused;
        for container in self.containers.values_mut() {
            container.set_host_paused(host_paused);
        }
    }

    pub fn container_count(&self) -> usize {
        self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    /// Drop every container immediately, persistent or not.
    pub fn clear(&mut self) {
        self.containers.clear();
    }
}
