//! The tween state machine: one interpolation job over one target property.
//!
//! A [`Tween`] advances through `NotStarted → Delayed → Active → Done`,
//! with pause as an orthogonal overlay on the middle states. Each tick it
//! accumulates elapsed time, evaluates its easing curve, writes the result
//! through its [`TargetHandle`], and notifies observers. The terminal tick
//! snaps the value to `to` exactly, with no floating round-off.
//!
//! `Tween<V>` is generic over the value type; groups store tweens
//! type-erased behind [`AnyTween`] so float, vector, and color jobs run
//! side by side. Direction control lives in the owning container: the
//! tween's own time scale contributes magnitude only, never sign.

use std::mem;

use crate::easing::{Curve, Easing};
use crate::events::{Observers, TweenScheduler};
use crate::target::{SinkId, TargetHandle};
use crate::types::{LoopMode, SnapOnDelete, TweenCategory, TweenId, ValueKind};
use crate::value::TweenValue;

/// Type-erased interface a group uses to drive its tweens.
///
/// Everything here fans out from the owning container during playback;
/// hosts normally interact with the concrete [`Tween`] builder and then
/// hand the boxed unit over.
pub trait AnyTween {
    /// Advance by `dt` seconds, scaled by the container's absolute time
    /// scale. Returns whether the tween is done.
    fn advance(
        &mut self,
        dt: f32,
        container_abs_scale: f32,
        host_paused: bool,
        scheduler: &mut TweenScheduler,
    ) -> bool;

    /// Reset for another pass. `from_end` swaps the endpoints first
    /// (yoyo passes play the swapped orientation).
    fn restart(&mut self, from_end: bool);

    /// Reverse playback by swapping the endpoints. When `invert_elapsed`
    /// is set, elapsed time is mirrored so an in-flight tween keeps its
    /// current pose while changing direction.
    fn invert(&mut self, invert_elapsed: bool);

    /// Snap the written value to the start (`beginning`) or end pose.
    /// No-op until the tween has prepared.
    fn position_at(&mut self, beginning: bool);

    fn pause(&mut self, skip_while_paused: bool);
    fn resume(&mut self);
    fn toggle_pause(&mut self, skip_while_paused: bool);

    /// Mark for removal. Idempotent; see [`Tween::delete`].
    fn delete(&mut self, fire_end: bool, snap: SnapOnDelete, scheduler: &mut TweenScheduler);

    fn id(&self) -> TweenId;
    fn name(&self) -> Option<&str>;
    fn category(&self) -> TweenCategory;
    fn value_kind(&self) -> ValueKind;
    fn target_id(&self) -> SinkId;
    fn sequence_index(&self) -> usize;
    fn set_sequence_index(&mut self, index: usize);
    fn time_scale(&self) -> f32;
    fn loop_settings(&self) -> (i32, LoopMode);

    fn is_done(&self) -> bool;
    fn is_paused(&self) -> bool;
    fn is_pending_deletion(&self) -> bool;

    /// Whether the tween is actively interpolating right now: prepared,
    /// past its delay, not paused, not done, not deleted.
    fn is_tweening(&self) -> bool;

    /// Whether this tween writes to the given sink and matches the
    /// category filter (`None` matches any).
    fn matches(&self, sink: SinkId, category: Option<TweenCategory>) -> bool {
        self.target_id() == sink && category.is_none_or(|c| self.category() == c)
    }
}

/// One interpolation job from `from` to `to` over `duration` seconds.
pub struct Tween<V: TweenValue> {
    id: TweenId,
    name: Option<String>,
    category: TweenCategory,

    from: V,
    to: V,
    current: V,
    curve: Curve,

    duration: f32,
    elapsed: f32,
    delay: f32,
    delay_elapsed: f32,
    time_scale: f32,
    abs_time_scale: f32,
    num_loops: i32,
    loop_mode: LoopMode,

    target: TargetHandle<V>,
    sequence_index: usize,

    prepared: bool,
    started: bool,
    paused: bool,
    skip_while_paused: bool,
    pending_deletion: bool,
    done: bool,
    play_while_host_paused: bool,
    invert_at_start: bool,
    from_current: bool,
    watch_contacts: bool,
    contacts_bound: bool,

    observers: Observers<V>,
}

impl<V: TweenValue> Tween<V> {
    /// Create a tween writing to `target`, interpolating `from → to` over
    /// `duration` seconds with a linear curve.
    pub fn new(target: TargetHandle<V>, from: V, to: V, duration: f32) -> Self {
        Self {
            id: TweenId::new(),
            name: None,
            category: TweenCategory::default(),
            from,
            to,
            current: from,
            curve: Curve::default(),
            duration: duration.max(0.0),
            elapsed: 0.0,
            delay: 0.0,
            delay_elapsed: 0.0,
            time_scale: 1.0,
            abs_time_scale: 1.0,
            num_loops: 1,
            loop_mode: LoopMode::Restart,
            target,
            sequence_index: 0,
            prepared: false,
            started: false,
            paused: false,
            skip_while_paused: false,
            pending_deletion: false,
            done: false,
            play_while_host_paused: false,
            invert_at_start: false,
            from_current: false,
            watch_contacts: false,
            contacts_bound: false,
            observers: Observers::default(),
        }
    }

    /// Set the display name used for lookups.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the category tag.
    pub fn with_category(mut self, category: TweenCategory) -> Self {
        self.category = category;
        self
    }

    /// Set the easing preset.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.curve = easing.into();
        self
    }

    /// Set the full curve selection (preset or custom closure).
    pub fn with_curve(mut self, curve: Curve) -> Self {
        self.curve = curve;
        self
    }

    /// Delay activation by `delay` seconds.
    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    /// Set the tween's own time scale. Only the magnitude affects playback
    /// speed; direction is owned by the container's signed scale. A
    /// negative value here flags the tween for inversion when it is added.
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self.abs_time_scale = time_scale.abs();
        self
    }

    /// Loop request adopted by a container started from this tween.
    /// `num_loops <= 0` means infinite.
    pub fn with_loops(mut self, num_loops: i32, loop_mode: LoopMode) -> Self {
        self.num_loops = num_loops;
        self.loop_mode = loop_mode;
        self
    }

    /// Capture the target's live value as `from` at first activation.
    pub fn starting_from_current(mut self) -> Self {
        self.from_current = true;
        self
    }

    /// Swap the endpoints at first activation (start pre-inverted).
    pub fn inverted_at_start(mut self) -> Self {
        self.invert_at_start = true;
        self
    }

    /// Keep advancing while the host application is paused.
    pub fn playing_while_host_paused(mut self) -> Self {
        self.play_while_host_paused = true;
        self
    }

    /// Request contact/overlap notifications from the target sink.
    /// Sinks that do not support them log a warning and skip the binding.
    pub fn watching_contacts(mut self) -> Self {
        self.watch_contacts = true;
        self
    }

    /// Observe activation (fires on every loop pass).
    pub fn on_start(mut self, callback: impl FnMut(V, &mut TweenScheduler) + 'static) -> Self {
        self.observers.on_start.push(Box::new(callback));
        self
    }

    /// Observe every tick, including the terminal one.
    pub fn on_update(mut self, callback: impl FnMut(V, &mut TweenScheduler) + 'static) -> Self {
        self.observers.on_update.push(Box::new(callback));
        self
    }

    /// Observe completion.
    pub fn on_end(mut self, callback: impl FnMut(V, &mut TweenScheduler) + 'static) -> Self {
        self.observers.on_end.push(Box::new(callback));
        self
    }

    /// Observe pauses.
    pub fn on_pause(mut self, callback: impl FnMut(V) + 'static) -> Self {
        self.observers.on_pause.push(Box::new(callback));
        self
    }

    /// Observe resumes.
    pub fn on_resume(mut self, callback: impl FnMut(V) + 'static) -> Self {
        self.observers.on_resume.push(Box::new(callback));
        self
    }

    /// Box the tween for insertion into a container.
    pub fn into_unit(self) -> Box<dyn AnyTween> {
        Box::new(self)
    }

    /// The last computed value.
    pub fn current(&self) -> V {
        self.current
    }

    /// Current endpoints, in playback order.
    pub fn endpoints(&self) -> (V, V) {
        (self.from, self.to)
    }

    /// Elapsed active time in seconds (excludes the delay window).
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    fn scaled_step(&self, dt: f32, container_abs_scale: f32) -> f32 {
        dt * container_abs_scale * self.abs_time_scale
    }

    /// One-time setup at first activation: contact binding, live start
    /// capture, pre-inversion.
    fn prepare(&mut self) {
        self.prepared = true;
        self.bind_contacts();
        if self.from_current {
            if let Some(live) = self.target.read() {
                self.from = live;
            }
        }
        if self.invert_at_start {
            mem::swap(&mut self.from, &mut self.to);
        }
        self.current = self.from;
    }

    fn bind_contacts(&mut self) {
        if self.contacts_bound {
            return;
        }
        self.contacts_bound = true;
        if !self.watch_contacts {
            return;
        }
        if self.target.bind_contact_events() == Some(false) {
            tracing::warn!(
                tween = self.id.0,
                "target sink does not support contact events; binding skipped"
            );
        }
    }

    fn teardown(&mut self) {
        if self.watch_contacts && self.contacts_bound {
            self.target.unbind_contact_events();
        }
    }

    fn emit_end(&mut self, scheduler: &mut TweenScheduler) {
        Observers::emit(&mut self.observers.on_end, self.current, scheduler);
    }
}

impl<V: TweenValue> AnyTween for Tween<V> {
    fn advance(
        &mut self,
        dt: f32,
        container_abs_scale: f32,
        host_paused: bool,
        scheduler: &mut TweenScheduler,
    ) -> bool {
        if self.pending_deletion || self.done {
            return true;
        }

        if host_paused && !self.play_while_host_paused {
            return false;
        }

        if self.paused {
            if !self.skip_while_paused {
                // The tick is still consumed, but no value is written.
                if self.delay_elapsed < self.delay {
                    self.delay_elapsed += dt;
                } else {
                    self.elapsed += self.scaled_step(dt, container_abs_scale);
                }
            }
            return false;
        }

        if self.delay_elapsed < self.delay {
            // Runtime bindings attach before the first value write.
            self.bind_contacts();
            self.delay_elapsed += dt;
            return false;
        }

        if !self.target.is_valid() {
            // The host destroyed the target mid-flight; drop out quietly.
            tracing::debug!(tween = self.id.0, "target expired; tween self-deleting");
            self.pending_deletion = true;
            self.done = true;
            self.teardown();
            return true;
        }

        if self.elapsed <= 0.0 {
            if !self.prepared {
                self.prepare();
            }
            if !self.started {
                self.started = true;
                Observers::emit(&mut self.observers.on_start, self.current, scheduler);
            }
        }

        self.elapsed += self.scaled_step(dt, container_abs_scale);

        let done = self.elapsed >= self.duration;
        if done {
            self.elapsed = self.duration;
            self.current = self.to;
        } else {
            let progress = self.elapsed / self.duration;
            self.current = self
                .from
                .interpolate(&self.to, self.curve.evaluate(progress));
        }

        self.target.apply(self.current);

        // Update always fires, even on the terminal tick, so observers see
        // the final value.
        Observers::emit(&mut self.observers.on_update, self.current, scheduler);

        if done {
            self.done = true;
            self.emit_end(scheduler);
        }

        done
    }

    fn restart(&mut self, from_end: bool) {
        if self.pending_deletion {
            return;
        }
        self.elapsed = 0.0;
        self.done = false;
        self.paused = false;
        self.started = false;
        if from_end {
            mem::swap(&mut self.from, &mut self.to);
        }
        if self.prepared {
            self.current = self.from;
        }
    }

    fn invert(&mut self, invert_elapsed: bool) {
        mem::swap(&mut self.from, &mut self.to);
        if invert_elapsed && self.elapsed > 0.0 {
            self.elapsed = (self.duration - self.elapsed).max(0.0);
        }
    }

    fn position_at(&mut self, beginning: bool) {
        if !self.prepared {
            return;
        }
        self.current = if beginning { self.from } else { self.to };
        self.target.apply(self.current);
    }

    fn pause(&mut self, skip_while_paused: bool) {
        if self.paused || self.done || self.pending_deletion {
            return;
        }
        self.paused = true;
        self.skip_while_paused = skip_while_paused;
        Observers::emit_state(&mut self.observers.on_pause, self.current);
    }

    fn resume(&mut self) {
        if !self.paused {
            return;
        }
        self.paused = false;
        Observers::emit_state(&mut self.observers.on_resume, self.current);
    }

    fn toggle_pause(&mut self, skip_while_paused: bool) {
        if self.paused {
            self.resume();
        } else {
            self.pause(skip_while_paused);
        }
    }

    fn delete(&mut self, fire_end: bool, snap: SnapOnDelete, scheduler: &mut TweenScheduler) {
        if self.pending_deletion {
            return;
        }
        self.pending_deletion = true;

        match snap {
            SnapOnDelete::Begin => self.position_at(true),
            SnapOnDelete::End => self.position_at(false),
            SnapOnDelete::None => {}
        }

        if fire_end && !self.done {
            self.done = true;
            self.emit_end(scheduler);
        } else {
            self.done = true;
        }

        self.teardown();
    }

    fn id(&self) -> TweenId {
        self.id
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn category(&self) -> TweenCategory {
        self.category
    }

    fn value_kind(&self) -> ValueKind {
        V::KIND
    }

    fn target_id(&self) -> SinkId {
        self.target.id()
    }

    fn sequence_index(&self) -> usize {
        self.sequence_index
    }

    fn set_sequence_index(&mut self, index: usize) {
        self.sequence_index = index;
    }

    fn time_scale(&self) -> f32 {
        self.time_scale
    }

    fn loop_settings(&self) -> (i32, LoopMode) {
        (self.num_loops, self.loop_mode)
    }

    fn is_done(&self) -> bool {
        self.done
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn is_pending_deletion(&self) -> bool {
        self.pending_deletion
    }

    fn is_tweening(&self) -> bool {
        self.prepared && self.started && !self.done && !self.paused && !self.pending_deletion
    }
}

impl<V: TweenValue> std::fmt::Debug for Tween<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tween")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("category", &self.category)
            .field("from", &self.from)
            .field("to", &self.to)
            .field("elapsed", &self.elapsed)
            .field("duration", &self.duration)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::SharedValue;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn float_tween(from: f32, to: f32, duration: f32) -> (Tween<f32>, Rc<RefCell<SharedValue<f32>>>) {
        let sink = SharedValue::shared(from);
        let tween = Tween::new(TargetHandle::from_sink(&sink), from, to, duration);
        (tween, sink)
    }

    fn advance(tween: &mut Tween<f32>, dt: f32) -> bool {
        let mut scheduler = TweenScheduler::new();
        tween.advance(dt, 1.0, false, &mut scheduler)
    }

    #[test]
    fn test_linear_midpoint_is_exact() {
        let (mut tween, _sink) = float_tween(0.0, 100.0, 2.0);

        assert!(!advance(&mut tween, 1.0));
        assert_eq!(tween.current(), 50.0);
    }

    #[test]
    fn test_terminal_tick_snaps_to_end() {
        let (mut tween, sink) = float_tween(0.0, 10.0, 1.0);

        for _ in 0..3 {
            assert!(!advance(&mut tween, 0.25));
        }
        // Cumulative dt reaches the duration exactly on this tick.
        assert!(advance(&mut tween, 0.25));
        assert_eq!(tween.current(), 10.0);
        assert_eq!(sink.borrow().get(), 10.0);
        assert!(tween.is_done());
    }

    #[test]
    fn test_done_tween_reports_done_without_work() {
        let (mut tween, sink) = float_tween(0.0, 10.0, 0.5);
        assert!(advance(&mut tween, 1.0));

        sink.borrow_mut().set(99.0);
        assert!(advance(&mut tween, 1.0));
        // No further writes after completion.
        assert_eq!(sink.borrow().get(), 99.0);
    }

    #[test]
    fn test_delay_withholds_activation() {
        let sink = SharedValue::shared(0.0_f32);
        let mut tween =
            Tween::new(TargetHandle::from_sink(&sink), 0.0, 10.0, 1.0).with_delay(0.5);

        assert!(!advance(&mut tween, 0.25));
        assert!(!advance(&mut tween, 0.25));
        assert!(!tween.is_tweening());
        assert_eq!(sink.borrow().get(), 0.0);

        // First active tick.
        assert!(!advance(&mut tween, 0.25));
        assert!(tween.is_tweening());
        assert_eq!(tween.elapsed(), 0.25);
    }

    #[test]
    fn test_unit_time_scale_sign_does_not_reverse() {
        // A negative unit scale contributes magnitude only; direction is
        // the container's business.
        let sink = SharedValue::shared(0.0_f32);
        let mut tween =
            Tween::new(TargetHandle::from_sink(&sink), 0.0, 10.0, 1.0).with_time_scale(-2.0);

        assert!(!advance(&mut tween, 0.25));
        assert_eq!(tween.elapsed(), 0.5);
        assert_eq!(tween.current(), 5.0);
    }

    #[test]
    fn test_expired_target_self_deletes() {
        let (mut tween, sink) = float_tween(0.0, 10.0, 1.0);
        assert!(!advance(&mut tween, 0.25));

        drop(sink);
        assert!(advance(&mut tween, 0.25));
        assert!(tween.is_pending_deletion());
    }

    #[test]
    fn test_pause_consumes_tick_without_writing() {
        let (mut tween, sink) = float_tween(0.0, 10.0, 1.0);
        assert!(!advance(&mut tween, 0.25));
        assert_eq!(sink.borrow().get(), 2.5);

        // skip = false: elapsed keeps accumulating, value stays frozen.
        tween.pause(false);
        assert!(!advance(&mut tween, 0.25));
        assert_eq!(tween.elapsed(), 0.5);
        assert_eq!(sink.borrow().get(), 2.5);

        tween.resume();
        assert!(!advance(&mut tween, 0.25));
        assert_eq!(sink.borrow().get(), 7.5);
    }

    #[test]
    fn test_pause_with_skip_freezes_time() {
        let (mut tween, _sink) = float_tween(0.0, 10.0, 1.0);
        assert!(!advance(&mut tween, 0.25));

        tween.pause(true);
        assert!(!advance(&mut tween, 0.25));
        assert_eq!(tween.elapsed(), 0.25);
    }

    #[test]
    fn test_restart_from_end_swaps_endpoints() {
        let (mut tween, _sink) = float_tween(0.0, 10.0, 0.5);
        assert!(advance(&mut tween, 0.5));

        tween.restart(true);
        assert!(!tween.is_done());
        assert_eq!(tween.endpoints(), (10.0, 0.0));
        assert_eq!(tween.elapsed(), 0.0);

        tween.restart(true);
        assert_eq!(tween.endpoints(), (0.0, 10.0));
    }

    #[test]
    fn test_invert_mirrors_elapsed() {
        let (mut tween, _sink) = float_tween(0.0, 10.0, 1.0);
        assert!(!advance(&mut tween, 0.25));

        tween.invert(true);
        assert_eq!(tween.endpoints(), (10.0, 0.0));
        assert_eq!(tween.elapsed(), 0.75);

        // The mirrored pose matches the pre-inversion value.
        assert!(!advance(&mut tween, 0.0));
        assert_eq!(tween.current(), 2.5);
    }

    #[test]
    fn test_invert_without_elapsed_keeps_clock() {
        let (mut tween, _sink) = float_tween(0.0, 10.0, 1.0);
        assert!(!advance(&mut tween, 0.25));

        tween.invert(false);
        assert_eq!(tween.endpoints(), (10.0, 0.0));
        assert_eq!(tween.elapsed(), 0.25);
    }

    #[test]
    fn test_position_at_noop_before_prepare() {
        let (mut tween, sink) = float_tween(0.0, 10.0, 1.0);

        tween.position_at(false);
        assert_eq!(sink.borrow().get(), 0.0);

        assert!(!advance(&mut tween, 0.25));
        tween.position_at(false);
        assert_eq!(sink.borrow().get(), 10.0);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let end_count = Rc::new(RefCell::new(0));
        let counter = end_count.clone();

        let sink = SharedValue::shared(0.0_f32);
        let mut tween = Tween::new(TargetHandle::from_sink(&sink), 0.0, 10.0, 1.0)
            .on_end(move |_, _| *counter.borrow_mut() += 1);

        let mut scheduler = TweenScheduler::new();
        tween.advance(0.25, 1.0, false, &mut scheduler);

        tween.delete(true, SnapOnDelete::End, &mut scheduler);
        tween.delete(true, SnapOnDelete::End, &mut scheduler);

        assert_eq!(*end_count.borrow(), 1);
        assert_eq!(sink.borrow().get(), 10.0);
        assert!(tween.is_pending_deletion());
    }

    #[test]
    fn test_delete_after_completion_skips_end_event() {
        let end_count = Rc::new(RefCell::new(0));
        let counter = end_count.clone();

        let sink = SharedValue::shared(0.0_f32);
        let mut tween = Tween::new(TargetHandle::from_sink(&sink), 0.0, 10.0, 0.5)
            .on_end(move |_, _| *counter.borrow_mut() += 1);

        let mut scheduler = TweenScheduler::new();
        assert!(tween.advance(0.5, 1.0, false, &mut scheduler));
        assert_eq!(*end_count.borrow(), 1);

        tween.delete(true, SnapOnDelete::None, &mut scheduler);
        assert_eq!(*end_count.borrow(), 1);
    }

    #[test]
    fn test_starting_from_current_reads_live_value() {
        let sink = SharedValue::shared(4.0_f32);
        let mut tween = Tween::new(TargetHandle::from_sink(&sink), 0.0, 10.0, 1.0)
            .starting_from_current();

        assert!(!advance(&mut tween, 0.5));
        assert_eq!(tween.endpoints(), (4.0, 10.0));
        assert_eq!(tween.current(), 7.0);
    }

    #[test]
    fn test_inverted_at_start_swaps_before_first_write() {
        let sink = SharedValue::shared(0.0_f32);
        let mut tween =
            Tween::new(TargetHandle::from_sink(&sink), 0.0, 10.0, 1.0).inverted_at_start();

        assert!(!advance(&mut tween, 0.25));
        assert_eq!(tween.endpoints(), (10.0, 0.0));
        assert_eq!(tween.current(), 7.5);
    }

    #[test]
    fn test_start_fires_every_activation_update_every_tick() {
        let starts = Rc::new(RefCell::new(0));
        let updates = Rc::new(RefCell::new(0));
        let s = starts.clone();
        let u = updates.clone();

        let sink = SharedValue::shared(0.0_f32);
        let mut tween = Tween::new(TargetHandle::from_sink(&sink), 0.0, 10.0, 0.5)
            .on_start(move |_, _| *s.borrow_mut() += 1)
            .on_update(move |_, _| *u.borrow_mut() += 1);

        assert!(!advance(&mut tween, 0.25));
        assert!(advance(&mut tween, 0.25));
        assert_eq!(*starts.borrow(), 1);
        // Update fires on the terminal tick too.
        assert_eq!(*updates.borrow(), 2);

        tween.restart(false);
        assert!(!advance(&mut tween, 0.25));
        assert_eq!(*starts.borrow(), 2);
    }

    #[test]
    fn test_host_pause_gates_unflagged_tweens() {
        let (mut tween, _sink) = float_tween(0.0, 10.0, 1.0);
        let mut scheduler = TweenScheduler::new();

        assert!(!tween.advance(0.25, 1.0, true, &mut scheduler));
        assert_eq!(tween.elapsed(), 0.0);

        let sink = SharedValue::shared(0.0_f32);
        let mut flagged = Tween::new(TargetHandle::from_sink(&sink), 0.0, 10.0, 1.0)
            .playing_while_host_paused();
        assert!(!flagged.advance(0.25, 1.0, true, &mut scheduler));
        assert_eq!(flagged.elapsed(), 0.25);
    }

    #[test]
    fn test_zero_duration_completes_on_first_tick() {
        let (mut tween, sink) = float_tween(0.0, 10.0, 0.0);

        assert!(advance(&mut tween, 0.016));
        assert_eq!(sink.borrow().get(), 10.0);
    }
}
