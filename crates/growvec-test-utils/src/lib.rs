//! Instrumented element types for growvec development.
//!
//! The container's correctness hinges on every element being constructed
//! and dropped exactly once. These fixtures make that observable:
//!
//! - [`Ledger`] / [`Tracked`] — count constructions, clones, and drops.
//! - [`CloneBudget`] / [`PanicOnClone`] — clone panics once a shared
//!   budget is spent.
//! - [`Unit`] — zero-sized element with per-thread live counting.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::cell::Cell;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Default)]
struct Counts {
    constructed: AtomicUsize,
    cloned: AtomicUsize,
    dropped: AtomicUsize,
}

/// Shared counters for a family of [`Tracked`] values.
///
/// Each test creates its own ledger, so parallel tests never share counts.
#[derive(Clone, Default)]
pub struct Ledger {
    counts: Arc<Counts>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `value` so that its lifecycle is recorded in this ledger.
    pub fn track<V>(&self, value: V) -> Tracked<V> {
        self.counts.constructed.fetch_add(1, Ordering::Relaxed);
        Tracked {
            value,
            counts: Arc::clone(&self.counts),
        }
    }

    /// Values created through [`track`](Ledger::track) or `clone`.
    pub fn constructed(&self) -> usize {
        self.counts.constructed.load(Ordering::Relaxed)
    }

    /// Values created through `clone` only.
    pub fn clones(&self) -> usize {
        self.counts.cloned.load(Ordering::Relaxed)
    }

    pub fn dropped(&self) -> usize {
        self.counts.dropped.load(Ordering::Relaxed)
    }

    /// Constructed minus dropped.
    ///
    /// # Panics
    ///
    /// Panics if more values were dropped than constructed, which means
    /// something was dropped twice.
    pub fn live(&self) -> usize {
        let constructed = self.constructed();
        let dropped = self.dropped();
        assert!(
            dropped <= constructed,
            "double drop: {dropped} drops for {constructed} constructions"
        );
        constructed - dropped
    }
}

impl fmt::Debug for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ledger")
            .field("constructed", &self.constructed())
            .field("cloned", &self.clones())
            .field("dropped", &self.dropped())
            .finish()
    }
}

/// A value whose construction, clone, and drop are counted by a [`Ledger`].
pub struct Tracked<V> {
    value: V,
    counts: Arc<Counts>,
}

impl<V> Tracked<V> {
    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }
}

impl<V: Clone> Clone for Tracked<V> {
    fn clone(&self) -> Self {
        self.counts.constructed.fetch_add(1, Ordering::Relaxed);
        self.counts.cloned.fetch_add(1, Ordering::Relaxed);
        Self {
            value: self.value.clone(),
            counts: Arc::clone(&self.counts),
        }
    }
}

impl<V> Drop for Tracked<V> {
    fn drop(&mut self) {
        self.counts.dropped.fetch_add(1, Ordering::Relaxed);
    }
}

impl<V: PartialEq> PartialEq for Tracked<V> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<V: fmt::Debug> fmt::Debug for Tracked<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Tracked").field(&self.value).finish()
    }
}

/// A shared allowance of successful clones for [`PanicOnClone`] values.
#[derive(Clone)]
pub struct CloneBudget {
    remaining: Arc<AtomicUsize>,
}

impl CloneBudget {
    /// Allow `clones` successful clones across every value made from this
    /// budget; the next one panics.
    pub fn new(clones: usize) -> Self {
        Self {
            remaining: Arc::new(AtomicUsize::new(clones)),
        }
    }

    pub fn make(&self, ledger: &Ledger, id: u32) -> PanicOnClone {
        PanicOnClone {
            inner: ledger.track(id),
            remaining: Arc::clone(&self.remaining),
        }
    }

    pub fn remaining(&self) -> usize {
        self.remaining.load(Ordering::Relaxed)
    }
}

/// Tracked element whose `clone` panics once its [`CloneBudget`] is spent.
///
/// Use with `std::panic::catch_unwind` to check that a container leaks and
/// double-drops nothing when an element clone fails partway through.
#[derive(Debug)]
pub struct PanicOnClone {
    inner: Tracked<u32>,
    remaining: Arc<AtomicUsize>,
}

impl PanicOnClone {
    pub fn id(&self) -> u32 {
        *self.inner.value()
    }
}

impl Clone for PanicOnClone {
    fn clone(&self) -> Self {
        if self
            .remaining
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_sub(1))
            .is_err()
        {
            panic!("clone budget exhausted at element {}", self.id());
        }
        Self {
            inner: self.inner.clone(),
            remaining: Arc::clone(&self.remaining),
        }
    }
}

thread_local! {
    static UNIT_LIVE: Cell<isize> = const { Cell::new(0) };
}

/// Zero-sized element with a per-thread live count.
///
/// The count is thread-local, so each `#[test]` (one thread per test)
/// observes only its own values.
#[derive(Debug, PartialEq, Eq)]
pub struct Unit(());

impl Unit {
    pub fn new() -> Self {
        UNIT_LIVE.with(|live| live.set(live.get() + 1));
        Unit(())
    }

    /// Units alive on the current thread.
    ///
    /// # Panics
    ///
    /// Panics if more units were dropped than created on this thread.
    pub fn live() -> usize {
        let live = UNIT_LIVE.with(Cell::get);
        assert!(live >= 0, "double drop: unit live count is {live}");
        live as usize
    }
}

impl Default for Unit {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Unit {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl Drop for Unit {
    fn drop(&mut self) {
        UNIT_LIVE.with(|live| live.set(live.get() - 1));
    }
}
