//! Lifecycle observers and the mid-tick mutation channel.
//!
//! Tweens notify observers synchronously, in registration order, at fixed
//! points of their lifecycle: start, update (every tick, including the
//! terminal one), end, pause, and resume. Start/update/end observers
//! additionally receive a [`TweenScheduler`]: the only legal way to grow or
//! cancel the owning timeline from inside a tick.
//!
//! The scheduler is a deferred queue. Nothing it records touches the
//! container until the container drains it after the current group walk,
//! so observers can never invalidate the iteration they were called from.
//! Work queued during tick T receives its first advance at T+1, and the
//! parent defers its own completion for the tick that saw growth.

use crate::target::SinkId;
use crate::tween::AnyTween;
use crate::types::TweenCategory;

/// Where a pending tween lands in the owning container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Wrap the tween in a new sequence step at the given index.
    Sequence,
    /// Join the existing sequence step at the given index.
    Parallel,
}

/// A tween waiting to be spliced into the container.
pub struct PendingInsert {
    pub unit: Box<dyn AnyTween>,
    pub sequence_index: usize,
    pub placement: Placement,
}

impl std::fmt::Debug for PendingInsert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingInsert")
            .field("id", &self.unit.id())
            .field("sequence_index", &self.sequence_index)
            .field("placement", &self.placement)
            .finish()
    }
}

/// Deferred mutation queue handed to observers during a tick.
#[derive(Debug, Default)]
pub struct TweenScheduler {
    inserts: Vec<PendingInsert>,
    deletes: Vec<(SinkId, Option<TweenCategory>)>,
}

impl TweenScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a tween as a new sequence step at `sequence_index`.
    pub fn append_sequence(&mut self, unit: Box<dyn AnyTween>, sequence_index: usize) {
        self.inserts.push(PendingInsert {
            unit,
            sequence_index,
            placement: Placement::Sequence,
        });
    }

    /// Queue a tween to join the existing step at `sequence_index`.
    pub fn join_parallel(&mut self, unit: Box<dyn AnyTween>, sequence_index: usize) {
        self.inserts.push(PendingInsert {
            unit,
            sequence_index,
            placement: Placement::Parallel,
        });
    }

    /// Queue cancellation of every tween writing to `sink`, optionally
    /// restricted to one category.
    pub fn cancel_target(&mut self, sink: SinkId, category: Option<TweenCategory>) {
        self.deletes.push((sink, category));
    }

    /// Whether any mutation is queued.
    pub fn is_empty(&self) -> bool {
        self.inserts.is_empty() && self.deletes.is_empty()
    }

    /// Number of queued insertions.
    pub fn pending_inserts(&self) -> usize {
        self.inserts.len()
    }

    pub(crate) fn take_pending(
        &mut self,
    ) -> (Vec<PendingInsert>, Vec<(SinkId, Option<TweenCategory>)>) {
        (
            std::mem::take(&mut self.inserts),
            std::mem::take(&mut self.deletes),
        )
    }
}

/// Observer invoked with the tween's current value and the mutation queue.
pub type ValueCallback<V> = Box<dyn FnMut(V, &mut TweenScheduler)>;

/// Observer invoked with the tween's current value only (pause/resume).
pub type StateCallback<V> = Box<dyn FnMut(V)>;

/// Ordered observer lists for one tween.
pub(crate) struct Observers<V> {
    pub(crate) on_start: Vec<ValueCallback<V>>,
    pub(crate) on_update: Vec<ValueCallback<V>>,
    pub(crate) on_end: Vec<ValueCallback<V>>,
    pub(crate) on_pause: Vec<StateCallback<V>>,
    pub(crate) on_resume: Vec<StateCallback<V>>,
}

impl<V> Default for Observers<V> {
    fn default() -> Self {
        Self {
            on_start: Vec::new(),
            on_update: Vec::new(),
            on_end: Vec::new(),
            on_pause: Vec::new(),
            on_resume: Vec::new(),
        }
    }
}

impl<V: Copy> Observers<V> {
    pub(crate) fn emit(
        list: &mut [ValueCallback<V>],
        value: V,
        scheduler: &mut TweenScheduler,
    ) {
        for callback in list.iter_mut() {
            callback(value, scheduler);
        }
    }

    pub(crate) fn emit_state(list: &mut [StateCallback<V>], value: V) {
        for callback in list.iter_mut() {
            callback(value);
        }
    }
}
