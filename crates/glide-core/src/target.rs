//! Target handles and the value-sink capability contract.
//!
//! A tween never owns the object it animates. It holds a `TargetHandle`: a
//! weak reference to a [`ValueSink`] owned by the host, plus a stable
//! [`SinkId`] captured at construction for identity matching. If the host
//! drops the sink mid-flight, the handle expires and the owning tween
//! deletes itself instead of dereferencing a dangling target.
//!
//! The sink is resolved once at tween construction time; per-tick dispatch
//! is a single dynamic call with no type re-checks.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Capability contract for pushing computed values onto a concrete target.
///
/// Implementations are simple per-property writers ("set actor location",
/// "set widget opacity"). The default method bodies cover targets that
/// cannot report a live value or contact events.
pub trait ValueSink<V> {
    /// Write a newly computed value. Called every tick, including the
    /// terminal one.
    fn apply(&mut self, value: V);

    /// Report the target's live value, if it has one. Used by tweens
    /// configured to capture their start value at activation.
    fn read(&self) -> Option<V> {
        None
    }

    /// Start delivering contact/overlap notifications for this target.
    ///
    /// Returns `false` when the target has no such notion; callers treat
    /// that as a skipped binding, not an error.
    fn bind_contact_events(&mut self) -> bool {
        false
    }

    /// Stop delivering contact/overlap notifications.
    fn unbind_contact_events(&mut self) {}
}

/// Stable, type-erased identity of a sink.
///
/// Two handles compare equal when they were built from the same sink
/// allocation, regardless of the value type they write. Used for
/// "is this object being tweened" lookups and bulk cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SinkId(usize);

impl SinkId {
    /// Identity of a shared sink allocation.
    pub fn of<S: ?Sized>(sink: &Rc<RefCell<S>>) -> Self {
        Self(Rc::as_ptr(sink).cast::<()>() as usize)
    }
}

/// Weak, non-owning reference to a [`ValueSink`].
pub struct TargetHandle<V> {
    sink: Weak<RefCell<dyn ValueSink<V>>>,
    id: SinkId,
}

impl<V> Clone for TargetHandle<V> {
    fn clone(&self) -> Self {
        Self {
            sink: self.sink.clone(),
            id: self.id,
        }
    }
}

impl<V> std::fmt::Debug for TargetHandle<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TargetHandle")
            .field("id", &self.id)
            .field("valid", &self.is_valid())
            .finish()
    }
}

impl<V> TargetHandle<V> {
    /// Build a handle from an already type-erased sink.
    pub fn new(sink: &Rc<RefCell<dyn ValueSink<V>>>) -> Self {
        Self {
            sink: Rc::downgrade(sink),
            id: SinkId::of(sink),
        }
    }

    /// Build a handle from a concrete sink, erasing its type.
    pub fn from_sink<S>(sink: &Rc<RefCell<S>>) -> Self
    where
        S: ValueSink<V> + 'static,
        V: 'static,
    {
        let id = SinkId::of(sink);
        let erased: Rc<RefCell<dyn ValueSink<V>>> = sink.clone();
        Self {
            sink: Rc::downgrade(&erased),
            id,
        }
    }

    /// Whether the host still owns the sink.
    pub fn is_valid(&self) -> bool {
        self.sink.strong_count() > 0
    }

    /// Stable identity of the underlying sink.
    pub fn id(&self) -> SinkId {
        self.id
    }

    /// Write a value through the sink. Returns `false` if the sink expired.
    pub fn apply(&self, value: V) -> bool {
        match self.sink.upgrade() {
            Some(sink) => {
                sink.borrow_mut().apply(value);
                true
            }
            None => false,
        }
    }

    /// Read the target's live value, if the sink is alive and supports it.
    pub fn read(&self) -> Option<V> {
        self.sink.upgrade().and_then(|sink| sink.borrow().read())
    }

    /// Attempt to bind contact notifications.
    ///
    /// `None` when the sink expired, otherwise whether the sink supports
    /// the binding.
    pub fn bind_contact_events(&self) -> Option<bool> {
        self.sink
            .upgrade()
            .map(|sink| sink.borrow_mut().bind_contact_events())
    }

    /// Release a contact binding, if the sink is still alive.
    pub fn unbind_contact_events(&self) {
        if let Some(sink) = self.sink.upgrade() {
            sink.borrow_mut().unbind_contact_events();
        }
    }
}

/// Cell-backed sink that stores the most recently applied value.
///
/// The reference sink for tests and for hosts that poll animated values
/// instead of receiving writes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SharedValue<V> {
    value: V,
}

impl<V: Copy> SharedValue<V> {
    /// Allocate a shared sink holding `initial`.
    pub fn shared(initial: V) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self { value: initial }))
    }

    /// The most recently applied value.
    pub fn get(&self) -> V {
        self.value
    }

    /// Overwrite the stored value directly (host-side mutation).
    pub fn set(&mut self, value: V) {
        self.value = value;
    }
}

impl<V: Copy> ValueSink<V> for SharedValue<V> {
    fn apply(&mut self, value: V) {
        self.value = value;
    }

    fn read(&self) -> Option<V> {
        Some(self.value)
    }
}

/// Closure-backed sink forwarding every applied value to a callback.
pub struct FnSink<V> {
    f: Box<dyn FnMut(V)>,
}

impl<V> FnSink<V> {
    /// Allocate a shared sink around `f`.
    pub fn shared(f: impl FnMut(V) + 'static) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self { f: Box::new(f) }))
    }
}

impl<V> ValueSink<V> for FnSink<V> {
    fn apply(&mut self, value: V) {
        (self.f)(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_value_apply_and_read() {
        let sink = SharedValue::shared(0.0_f32);
        let handle = TargetHandle::from_sink(&sink);

        assert!(handle.is_valid());
        assert!(handle.apply(42.0));
        assert_eq!(sink.borrow().get(), 42.0);
        assert_eq!(handle.read(), Some(42.0));
    }

    #[test]
    fn test_handle_expires_when_sink_dropped() {
        let sink = SharedValue::shared(0.0_f32);
        let handle = TargetHandle::from_sink(&sink);
        drop(sink);

        assert!(!handle.is_valid());
        assert!(!handle.apply(1.0));
        assert_eq!(handle.read(), None);
        assert_eq!(handle.bind_contact_events(), None);
    }

    #[test]
    fn test_sink_id_identity() {
        let a = SharedValue::shared(0.0_f32);
        let b = SharedValue::shared(0.0_f32);

        let handle_a = TargetHandle::from_sink(&a);
        let handle_a2 = TargetHandle::from_sink(&a);
        let handle_b = TargetHandle::from_sink(&b);

        assert_eq!(handle_a.id(), handle_a2.id());
        assert_eq!(handle_a.id(), SinkId::of(&a));
        assert_ne!(handle_a.id(), handle_b.id());
    }

    #[test]
    fn test_fn_sink_forwards_values() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        let sink = FnSink::shared(move |v: f32| log.borrow_mut().push(v));
        let handle = TargetHandle::from_sink(&sink);

        handle.apply(1.0);
        handle.apply(2.0);
        assert_eq!(*seen.borrow(), vec![1.0, 2.0]);
    }

    #[test]
    fn test_contact_binding_defaults_unsupported() {
        let sink = SharedValue::shared(0.0_f32);
        let handle = TargetHandle::from_sink(&sink);

        assert_eq!(handle.bind_contact_events(), Some(false));
        // Unbind on an unsupporting sink is a no-op.
        handle.unbind_contact_events();
    }
}
