//! Parallel groups: one step of a sequence, running its tweens together.
//!
//! A group owns an unordered set of tweens that must all complete before
//! the step is considered done. Tweens finished but not deleted stay in the
//! group so loop passes can restart them; tweens marked for deletion are
//! compacted out once they report done.
//!
//! Reentrancy: observers never mutate the group mid-walk (additions go
//! through the container's scheduler), but the group still tracks growth so
//! the container can tell "truly finished" apart from "grew during the tick
//! it was checked" and defer completion accordingly.

use crate::events::TweenScheduler;
use crate::target::SinkId;
use crate::tween::AnyTween;
use crate::types::{SnapOnDelete, TweenCategory};

/// A set of tweens that play back simultaneously.
#[derive(Default)]
pub struct ParallelGroup {
    units: Vec<Box<dyn AnyTween>>,
    /// Unit count observed at the end of the last tick, used to detect
    /// reentrant growth.
    known_count: usize,
}

impl ParallelGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// A group seeded with a single tween.
    pub fn from_unit(unit: Box<dyn AnyTween>) -> Self {
        Self {
            units: vec![unit],
            known_count: 1,
        }
    }

    /// Join a tween into this group.
    pub fn add(&mut self, unit: Box<dyn AnyTween>) {
        self.units.push(unit);
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Advance every tween by `dt`. Returns whether all of them are done.
    ///
    /// Tweens that finished earlier report done without further work, so a
    /// group stays "done" across repeated ticks until restarted.
    pub fn tick(
        &mut self,
        dt: f32,
        container_abs_scale: f32,
        host_paused: bool,
        scheduler: &mut TweenScheduler,
    ) -> bool {
        let mut all_done = true;
        for unit in &mut self.units {
            let done = unit.advance(dt, container_abs_scale, host_paused, scheduler);
            all_done = all_done && done;
        }

        // Deleted tweens leave the collection once they report done;
        // finished-but-alive tweens stay for loop reuse.
        self.units
            .retain(|unit| !(unit.is_done() && unit.is_pending_deletion()));

        self.known_count = self.units.len();
        all_done
    }

    /// Whether the group grew since the last tick finished (i.e. observers
    /// scheduled new tweens into it). Resets the watermark.
    pub fn take_new_additions(&mut self) -> bool {
        let grew = self.units.len() > self.known_count;
        self.known_count = self.units.len();
        grew
    }

    /// Reset every tween for another pass. `from_end` swaps endpoints
    /// (yoyo); `also_done` includes tweens that already completed.
    pub fn restart(&mut self, from_end: bool, also_done: bool) {
        for unit in &mut self.units {
            if unit.is_done() && !also_done {
                continue;
            }
            unit.restart(from_end);
        }
    }

    /// Snap every prepared tween to its start or end pose.
    pub fn position_at(&mut self, beginning: bool) {
        for unit in &mut self.units {
            unit.position_at(beginning);
        }
    }

    /// Reverse every tween's direction.
    pub fn invert_all(&mut self, invert_elapsed: bool) {
        for unit in &mut self.units {
            unit.invert(invert_elapsed);
        }
    }

    /// Delete every tween writing to `sink` that matches the category
    /// filter (`None` matches any).
    pub fn delete_by_target(
        &mut self,
        sink: SinkId,
        category: Option<TweenCategory>,
        scheduler: &mut TweenScheduler,
    ) {
        for unit in &mut self.units {
            if unit.matches(sink, category) {
                unit.delete(false, SnapOnDelete::None, scheduler);
            }
        }
    }

    /// Delete every tween with the given name.
    pub fn delete_by_name(&mut self, name: &str, scheduler: &mut TweenScheduler) {
        for unit in &mut self.units {
            if unit.name() == Some(name) {
                unit.delete(false, SnapOnDelete::None, scheduler);
            }
        }
    }

    /// The first mid-flight tween writing to `sink`, if any.
    pub fn find_active_for_target(
        &mut self,
        sink: SinkId,
        category: Option<TweenCategory>,
    ) -> Option<&mut (dyn AnyTween + 'static)> {
        self.units
            .iter_mut()
            .find(|unit| unit.is_tweening() && unit.matches(sink, category))
            .map(|unit| unit.as_mut())
    }

}

impl std::fmt::Debug for ParallelGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParallelGroup")
            .field("units", &self.units.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::{SharedValue, TargetHandle};
    use crate::tween::Tween;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn unit(
        sink: &Rc<RefCell<SharedValue<f32>>>,
        from: f32,
        to: f32,
        duration: f32,
    ) -> Box<dyn AnyTween> {
        Tween::new(TargetHandle::from_sink(sink), from, to, duration).into_unit()
    }

    #[test]
    fn test_group_done_when_all_units_done() {
        let a = SharedValue::shared(0.0_f32);
        let b = SharedValue::shared(0.0_f32);

        let mut group = ParallelGroup::from_unit(unit(&a, 0.0, 10.0, 0.5));
        group.add(unit(&b, 0.0, 10.0, 1.0));

        let mut scheduler = TweenScheduler::new();
        assert!(!group.tick(0.5, 1.0, false, &mut scheduler));
        assert_eq!(a.borrow().get(), 10.0);
        assert_eq!(b.borrow().get(), 5.0);

        assert!(group.tick(0.5, 1.0, false, &mut scheduler));
        assert_eq!(b.borrow().get(), 10.0);
        // Finished units stay for loop reuse.
        assert_eq!(group.len(), 2);
    }

    #[test]
    fn test_deleted_units_are_compacted_once_done() {
        let a = SharedValue::shared(0.0_f32);
        let sink_id = TargetHandle::<f32>::from_sink(&a).id();

        let mut group = ParallelGroup::from_unit(unit(&a, 0.0, 10.0, 1.0));
        let mut scheduler = TweenScheduler::new();

        group.tick(0.25, 1.0, false, &mut scheduler);
        group.delete_by_target(sink_id, None, &mut scheduler);

        assert!(group.tick(0.25, 1.0, false, &mut scheduler));
        assert!(group.is_empty());
    }

    #[test]
    fn test_take_new_additions_detects_growth() {
        let a = SharedValue::shared(0.0_f32);
        let mut group = ParallelGroup::from_unit(unit(&a, 0.0, 10.0, 0.25));
        let mut scheduler = TweenScheduler::new();

        assert!(group.tick(0.25, 1.0, false, &mut scheduler));
        assert!(!group.take_new_additions());

        // Simulates the container splicing a scheduled unit in after the
        // walk: the next check reports growth exactly once.
        group.add(unit(&a, 0.0, 5.0, 0.25));
        assert!(group.take_new_additions());
        assert!(!group.take_new_additions());
    }

    #[test]
    fn test_restart_skips_done_units_when_asked() {
        let a = SharedValue::shared(0.0_f32);
        let b = SharedValue::shared(0.0_f32);

        let mut group = ParallelGroup::from_unit(unit(&a, 0.0, 10.0, 0.25));
        group.add(unit(&b, 0.0, 10.0, 1.0));

        let mut scheduler = TweenScheduler::new();
        group.tick(0.5, 1.0, false, &mut scheduler);

        group.restart(false, false);
        // The long tween restarted; the finished one stayed done.
        assert!(!group.tick(0.25, 1.0, false, &mut scheduler));
        assert_eq!(b.borrow().get(), 2.5);
        assert_eq!(a.borrow().get(), 10.0);
    }

    #[test]
    fn test_find_active_for_target_respects_category() {
        let a = SharedValue::shared(0.0_f32);
        let sink_id = TargetHandle::<f32>::from_sink(&a).id();

        let tween = Tween::new(TargetHandle::from_sink(&a), 0.0, 10.0, 1.0)
            .with_category(TweenCategory::Move);
        let mut group = ParallelGroup::from_unit(tween.into_unit());
        let mut scheduler = TweenScheduler::new();

        // Not yet tweening before the first tick.
        assert!(group.find_active_for_target(sink_id, None).is_none());

        group.tick(0.25, 1.0, false, &mut scheduler);
        assert!(group.find_active_for_target(sink_id, None).is_some());
        assert!(group
            .find_active_for_target(sink_id, Some(TweenCategory::Move))
            .is_some());
        assert!(group
            .find_active_for_target(sink_id, Some(TweenCategory::Scale))
            .is_none());
    }

    #[test]
    fn test_delete_by_name() {
        let a = SharedValue::shared(0.0_f32);
        let named = Tween::new(TargetHandle::from_sink(&a), 0.0, 10.0, 1.0).with_name("fade");
        let mut group = ParallelGroup::from_unit(named.into_unit());
        group.add(unit(&a, 0.0, 5.0, 1.0));

        let mut scheduler = TweenScheduler::new();
        group.delete_by_name("fade", &mut scheduler);
        group.tick(0.25, 1.0, false, &mut scheduler);

        assert_eq!(group.len(), 1);
    }
}
