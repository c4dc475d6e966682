//! Tween containers: ordered sequences of parallel groups.
//!
//! A container plays exactly one group at a time, forward or backward,
//! looping per its [`LoopMode`]. Groups never run concurrently with each
//! other; only tweens *within* a group do.
//!
//! Mid-flight growth is legal: observers append new tweens or whole steps
//! through the [`TweenScheduler`], and the container splices them in after
//! the current group walk. A tick that saw growth never completes the
//! container, so newly added work always receives its first advance on the
//! following tick.
//!
//! Persistent containers are never reported finished to their manager:
//! once the loop budget is exhausted they idle with an internal
//! "sequences done" flag until restarted or explicitly marked for deletion.

use crate::events::{Placement, TweenScheduler};
use crate::group::ParallelGroup;
use crate::target::SinkId;
use crate::tween::AnyTween;
use crate::types::{ContainerId, Direction, LoopMode, TweenCategory};

/// An ordered timeline of parallel groups with loop control.
pub struct TweenContainer {
    id: ContainerId,
    groups: Vec<ParallelGroup>,

    index: usize,
    direction: Direction,
    loops_done: u32,
    num_loops: i32,
    loop_mode: LoopMode,

    time_scale: f32,
    abs_time_scale: f32,
    persistent: bool,
    paused: bool,
    pending_deletion: bool,
    started: bool,
    sequences_done: bool,
    invert_new_additions: bool,
    host_paused: bool,

    scheduler: TweenScheduler,
    on_end: Vec<Box<dyn FnMut()>>,
}

impl TweenContainer {
    /// Create an empty container. `num_loops <= 0` loops forever; a
    /// negative `time_scale` starts playback backward.
    pub fn new(num_loops: i32, loop_mode: LoopMode, time_scale: f32) -> Self {
        Self {
            id: ContainerId::new(),
            groups: Vec::new(),
            index: 0,
            direction: Direction::from_time_scale(time_scale),
            loops_done: 0,
            num_loops,
            loop_mode,
            time_scale,
            abs_time_scale: time_scale.abs(),
            persistent: false,
            paused: false,
            pending_deletion: false,
            started: false,
            sequences_done: false,
            invert_new_additions: time_scale < 0.0,
            host_paused: false,
            scheduler: TweenScheduler::new(),
            on_end: Vec::new(),
        }
    }

    pub fn id(&self) -> ContainerId {
        self.id
    }

    /// Advance the timeline by `dt` seconds.
    ///
    /// Returns `true` once every sequence has genuinely finished and the
    /// container is not persistent, the signal for the manager to recycle
    /// it. The tick that crosses the final loop boundary still returns
    /// `false`; completion is observed on the next call.
    pub fn tick(&mut self, dt: f32) -> bool {
        debug_assert!(dt >= 0.0, "tick called with negative delta");

        if self.pending_deletion {
            return true;
        }
        if self.sequences_done {
            return !self.persistent;
        }
        if self.paused || self.groups.is_empty() {
            return false;
        }

        if !self.started {
            self.started = true;
            self.direction = Direction::from_time_scale(self.time_scale);
            self.index = match self.direction {
                Direction::Forward => 0,
                Direction::Backward => self.groups.len() - 1,
            };
        }

        let index = self.index;
        let mut done = self.groups[index].tick(
            dt,
            self.abs_time_scale,
            self.host_paused,
            &mut self.scheduler,
        );

        let grew_groups = self.apply_pending();

        if done && (self.groups[index].take_new_additions() || grew_groups) {
            // Work arrived during the tick that was checked; give it a
            // chance to run before completing this step.
            done = false;
        }

        if done {
            match self.direction {
                Direction::Forward => {
                    if self.index + 1 >= self.groups.len() {
                        self.cross_boundary();
                    } else {
                        self.index += 1;
                    }
                }
                Direction::Backward => {
                    if self.index == 0 {
                        self.cross_boundary();
                    } else {
                        self.index -= 1;
                    }
                }
            }
        }

        false
    }

    /// Loop-boundary decision: restart the pass, reverse it, or finish.
    /// Fires the container end observers exactly once per crossing.
    fn cross_boundary(&mut self) {
        self.loops_done += 1;

        let infinite = self.num_loops <= 0;
        if infinite || (self.loops_done as i64) < self.num_loops as i64 {
            match self.loop_mode {
                LoopMode::Yoyo => {
                    self.direction = self.direction.flipped();
                    self.index = match self.direction {
                        Direction::Forward => 0,
                        Direction::Backward => self.groups.len() - 1,
                    };
                    // Swap endpoints everywhere so the return pass plays
                    // the sequence mirrored, including groups a backward
                    // pass terminated early.
                    for group in &mut self.groups {
                        group.restart(true, true);
                    }
                }
                LoopMode::Restart => {
                    self.index = 0;
                    self.direction = Direction::Forward;
                    for group in &mut self.groups {
                        group.restart(false, true);
                    }
                }
            }
        } else {
            self.sequences_done = true;
        }

        for callback in &mut self.on_end {
            callback();
        }
    }

    /// Splice scheduled work into the timeline. Returns whether any new
    /// group was appended.
    fn apply_pending(&mut self) -> bool {
        let mut grew_groups = false;

        loop {
            let (inserts, deletes) = self.scheduler.take_pending();
            if inserts.is_empty() && deletes.is_empty() {
                break;
            }

            for (sink, category) in deletes {
                for group in &mut self.groups {
                    group.delete_by_target(sink, category, &mut self.scheduler);
                }
            }

            for insert in inserts {
                match insert.placement {
                    Placement::Sequence => {
                        self.insert_sequence(insert.unit, insert.sequence_index);
                        grew_groups = true;
                    }
                    Placement::Parallel => {
                        self.insert_parallel(insert.unit, insert.sequence_index);
                    }
                }
            }
        }

        grew_groups
    }

    fn prepare_addition(&self, unit: &mut Box<dyn AnyTween>, sequence_index: usize) {
        unit.set_sequence_index(sequence_index);
        if self.invert_new_additions || unit.time_scale() < 0.0 {
            unit.invert(true);
        }
    }

    fn insert_sequence(&mut self, mut unit: Box<dyn AnyTween>, sequence_index: usize) {
        let at = sequence_index.min(self.groups.len());
        self.prepare_addition(&mut unit, at);
        self.groups.insert(at, ParallelGroup::from_unit(unit));
        self.sequences_done = false;
    }

    fn insert_parallel(&mut self, mut unit: Box<dyn AnyTween>, sequence_index: usize) {
        if sequence_index >= self.groups.len() {
            tracing::warn!(
                sequence_index,
                groups = self.groups.len(),
                "no sequence step to join; tween dropped"
            );
            return;
        }
        self.prepare_addition(&mut unit, sequence_index);
        self.groups[sequence_index].add(unit);
    }

    /// Append a tween as a new sequence step at `sequence_index`.
    ///
    /// The tween is inverted first when the container is playing backward
    /// or the tween carries a negative time scale of its own.
    pub fn add_sequence_tween(&mut self, unit: Box<dyn AnyTween>, sequence_index: usize) {
        self.insert_sequence(unit, sequence_index);
    }

    /// Append a tween at the tail of the sequence.
    pub fn append(&mut self, unit: Box<dyn AnyTween>) {
        let tail = self.groups.len();
        self.insert_sequence(unit, tail);
    }

    /// Join a tween into the existing step at `sequence_index`. Warns and
    /// drops the tween when there is no such step.
    pub fn add_parallel_tween(&mut self, unit: Box<dyn AnyTween>, sequence_index: usize) {
        self.insert_parallel(unit, sequence_index);
    }

    /// Join a tween into the last sequence step. Warns and drops the tween
    /// when the container has no steps yet.
    pub fn join(&mut self, unit: Box<dyn AnyTween>) {
        match self.groups.len().checked_sub(1) {
            Some(tail) => self.insert_parallel(unit, tail),
            None => {
                tracing::warn!("join called on an empty container; tween dropped");
            }
        }
    }

    /// Change playback speed. Flipping the sign reverses the logical
    /// direction and inverts every tween in every group exactly once, so
    /// in-flight interpolations reverse consistently.
    pub fn set_time_scale(&mut self, time_scale: f32) {
        let sign_flipped = (time_scale < 0.0) != (self.time_scale < 0.0);
        if sign_flipped {
            self.direction = self.direction.flipped();
            for group in &mut self.groups {
                group.invert_all(true);
            }
        }
        self.time_scale = time_scale;
        self.abs_time_scale = time_scale.abs();
        self.invert_new_additions = time_scale < 0.0;
    }

    /// Rewind the whole timeline and play it again from the edge implied
    /// by the current time-scale sign.
    pub fn restart(&mut self) {
        self.paused = false;
        self.sequences_done = false;
        self.loops_done = 0;

        let previous_direction = self.direction;

        // Visually reset the previous pass's pose before zeroing the
        // cursor: walk the steps in reverse playback order so the first
        // step's pose lands last.
        match previous_direction {
            Direction::Forward => {
                for group in self.groups.iter_mut().rev() {
                    group.position_at(true);
                }
            }
            Direction::Backward => {
                for group in &mut self.groups {
                    group.position_at(true);
                }
            }
        }

        for group in &mut self.groups {
            group.restart(false, true);
        }

        self.direction = Direction::from_time_scale(self.time_scale);
        self.index = match self.direction {
            Direction::Forward => 0,
            Direction::Backward => self.groups.len().saturating_sub(1),
        };
        self.started = !self.groups.is_empty();

        if self.direction != previous_direction {
            // Logical direction changed under the restart; re-orient every
            // tween so visual and logical state agree.
            for group in &mut self.groups {
                group.invert_all(true);
            }
        }
    }

    /// Delete every tween in every group writing to `sink`, optionally
    /// restricted to one category.
    pub fn delete_by_target(&mut self, sink: SinkId, category: Option<TweenCategory>) {
        for group in &mut self.groups {
            group.delete_by_target(sink, category, &mut self.scheduler);
        }
        self.apply_pending();
    }

    /// Delete every tween in every group with the given name.
    pub fn delete_by_name(&mut self, name: &str) {
        for group in &mut self.groups {
            group.delete_by_name(name, &mut self.scheduler);
        }
        self.apply_pending();
    }

    /// The mid-flight tween writing to `sink` in the *currently active*
    /// group, if any. Pending, paused, and finished tweens don't count.
    pub fn find_active_tween_for_target(
        &mut self,
        sink: SinkId,
        category: Option<TweenCategory>,
    ) -> Option<&mut (dyn AnyTween + 'static)> {
        if !self.started || self.sequences_done {
            return None;
        }
        self.groups
            .get_mut(self.index)?
            .find_active_for_target(sink, category)
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Replace the loop request. Takes effect at the next boundary.
    pub fn set_loop(&mut self, num_loops: i32, loop_mode: LoopMode) {
        self.num_loops = num_loops;
        self.loop_mode = loop_mode;
    }

    /// Persistent containers are kept alive by their manager after their
    /// sequences finish, idling until restarted.
    pub fn set_persistent(&mut self, persistent: bool) {
        self.persistent = persistent;
    }

    /// Request recycling regardless of persistence.
    pub fn mark_for_deletion(&mut self) {
        self.pending_deletion = true;
    }

    /// Register an observer fired at every loop boundary crossing
    /// (including the final one).
    pub fn on_end(&mut self, callback: impl FnMut() + 'static) {
        self.on_end.push(Box::new(callback));
    }

    pub(crate) fn set_host_paused(&mut self, host_paused: bool) {
        self.host_paused = host_paused;
    }

    pub fn is_pending_deletion(&self) -> bool {
        self.pending_deletion
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_persistent(&self) -> bool {
        self.persistent
    }

    /// Whether every sequence has played out its loop budget.
    pub fn sequences_done(&self) -> bool {
        self.sequences_done
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Index of the group currently playing.
    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Completed loop passes so far.
    pub fn loops_done(&self) -> u32 {
        self.loops_done
    }
}

impl std::fmt::Debug for TweenContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TweenContainer")
            .field("id", &self.id)
            .field("groups", &self.groups.len())
            .field("index", &self.index)
            .field("direction", &self.direction)
            .field("loops_done", &self.loops_done)
            .field("sequences_done", &self.sequences_done)
            .finish_non_exhaustive()
    }
}
