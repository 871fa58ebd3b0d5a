//! The growable array.
//!
//! [`GrowVec`] pairs a `RawBuf` with the length of its initialized
//! prefix. Every method keeps one rule: slots `[0, len)` are live and
//! dropped exactly once, slots `[len, capacity)` are never read or dropped.

#![allow(unsafe_code)]

use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};
use std::ptr;
use std::slice;

use crate::error::GrowError;
use crate::growth;
use crate::raw::{self, RawBuf};

/// A contiguous, growable array of `T`.
///
/// Appends are amortized O(1) under the [`growth`](crate::growth) policy.
/// Capacity only ever increases: [`pop`](GrowVec::pop) and
/// [`clear`](GrowVec::clear) keep the buffer for reuse.
///
/// Cloning allocates a fresh buffer of the source's *capacity*, so spare
/// room survives a clone.
pub struct GrowVec<T> {
    buf: RawBuf<T>,
    len: usize,
}

// SAFETY: GrowVec<T> owns its elements exactly like Box<[T]>.
unsafe impl<T: Send> Send for GrowVec<T> {}
// SAFETY: &GrowVec<T> only hands out &T.
unsafe impl<T: Sync> Sync for GrowVec<T> {}

impl<T> GrowVec<T> {
    /// Create an empty container. Does not allocate.
    pub const fn new() -> Self {
        Self {
            buf: RawBuf::new(),
            len: 0,
        }
    }

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether there are no live elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots in the current buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Base pointer of the buffer.
    ///
    /// Dangling when nothing is allocated. Useful for checking whether an
    /// operation reallocated.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    /// Append `value` at index `len`, growing first if the buffer is full.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow. Allocation failure is reported through
    /// [`std::alloc::handle_alloc_error`].
    pub fn push(&mut self, value: T) {
        self.push_with(|| value);
    }

    /// Append a clone of `value`.
    pub fn push_clone(&mut self, value: &T)
    where
        T: Clone,
    {
        self.push_with(|| value.clone());
    }

    /// Append the value produced by `make`, constructed straight into the
    /// new slot.
    ///
    /// The buffer grows before `make` runs. If `make` panics the length is
    /// unchanged; only the capacity may have grown.
    pub fn push_with<F>(&mut self, make: F)
    where
        F: FnOnce() -> T,
    {
        if self.len == self.buf.capacity() {
            if let Err(err) = self.try_grow() {
                raw::fail(err);
            }
        }
        // SAFETY: len < capacity after the growth check, and slot len is
        // uninitialized.
        unsafe { self.buf.slot(self.len).write(make()) };
        self.len += 1;
        self.debug_assert_invariants();
    }

    /// Append `value`, returning an error instead of aborting when the
    /// buffer cannot grow.
    ///
    /// On error the container is unchanged and `value` is dropped.
    pub fn try_push(&mut self, value: T) -> Result<(), GrowError> {
        if self.len == self.buf.capacity() {
            self.try_grow()?;
        }
        // SAFETY: as in push_with.
        unsafe { self.buf.slot(self.len).write(value) };
        self.len += 1;
        self.debug_assert_invariants();
        Ok(())
    }

    /// Remove and return the last element, or `None` if empty.
    ///
    /// Capacity is unchanged.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: slot len was the last live element and is no longer
        // counted, so reading it out transfers ownership exactly once.
        let value = unsafe { self.buf.slot(self.len).read() };
        self.debug_assert_invariants();
        Some(value)
    }

    /// Drop every live element. Capacity and buffer are kept.
    pub fn clear(&mut self) {
        let live = self.len;
        // Zero first: a panicking Drop must not lead to a second drop.
        self.len = 0;
        // SAFETY: [0, live) were initialized and are no longer counted.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.as_ptr(), live));
        }
        self.debug_assert_invariants();
    }

    /// The last element.
    ///
    /// # Panics
    ///
    /// Panics if the container is empty.
    #[track_caller]
    pub fn back(&self) -> &T {
        match self.as_slice().last() {
            Some(last) => last,
            None => panic!("back() called on an empty GrowVec"),
        }
    }

    /// Mutable access to the last element.
    ///
    /// # Panics
    ///
    /// Panics if the container is empty.
    #[track_caller]
    pub fn back_mut(&mut self) -> &mut T {
        match self.as_mut_slice().last_mut() {
            Some(last) => last,
            None => panic!("back_mut() called on an empty GrowVec"),
        }
    }

    /// Element at `index`, or `None` if `index >= len`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Mutable element at `index`, or `None` if `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Element at `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](GrowVec::len).
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len);
        // SAFETY: caller guarantees index < len, so the slot is live.
        unsafe { &*self.buf.slot(index) }
    }

    /// Mutable element at `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](GrowVec::len).
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len);
        // SAFETY: caller guarantees index < len; &mut self is exclusive.
        unsafe { &mut *self.buf.slot(index) }
    }

    /// The live elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: [0, len) are initialized; the pointer is aligned and
        // non-null even when unallocated.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    /// The live elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in as_slice, and &mut self is exclusive.
        unsafe { slice::from_raw_parts_mut(self.buf.as_ptr(), self.len) }
    }

    /// Move construction: hand this container's buffer to a new value in
    /// O(1), leaving `self` empty, unallocated, and ready for reuse.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Move assignment: release this container's contents, then take over
    /// `source`'s buffer, leaving `source` empty.
    ///
    /// Assigning a container to itself is a no-op.
    pub fn move_from(&mut self, source: &mut Self) {
        if ptr::eq(self, source) {
            return;
        }
        self.release();
        mem::swap(self, source);
        self.debug_assert_invariants();
    }

    /// Drop every element and free the buffer.
    fn release(&mut self) {
        self.clear();
        self.buf = RawBuf::new();
    }

    fn try_grow(&mut self) -> Result<(), GrowError> {
        let new_capacity =
            growth::next_capacity(self.buf.capacity()).ok_or(GrowError::CapacityOverflow {
                requested_len: self.len.saturating_add(1),
            })?;
        self.try_reallocate(new_capacity)
    }

    /// Move the live elements into a fresh buffer of `new_capacity` slots.
    ///
    /// If `new_capacity < len`, the trailing elements `[new_capacity, len)`
    /// are dropped and `len` is truncated. The new buffer is obtained
    /// before any state changes, so an allocation error leaves `self`
    /// untouched.
    pub(crate) fn try_reallocate(&mut self, new_capacity: usize) -> Result<(), GrowError> {
        let mut fresh = RawBuf::try_allocate(new_capacity)?;
        if new_capacity < self.len {
            let old_len = self.len;
            self.len = new_capacity;
            // SAFETY: [new_capacity, old_len) are live and no longer counted.
            unsafe {
                ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                    self.buf.slot(new_capacity),
                    old_len - new_capacity,
                ));
            }
        }
        // SAFETY: both buffers hold at least len slots and are distinct
        // allocations. The bitwise copy moves each element; the old slots
        // are then treated as uninitialized and never dropped.
        unsafe {
            ptr::copy_nonoverlapping(self.buf.as_ptr(), fresh.as_ptr(), self.len);
        }
        mem::swap(&mut self.buf, &mut fresh);
        // `fresh` now holds the old allocation and frees it on drop.
        drop(fresh);
        self.debug_assert_invariants();
        Ok(())
    }

    #[inline]
    fn debug_assert_invariants(&self) {
        debug_assert!(
            self.len <= self.buf.capacity(),
            "len {} exceeds capacity {}",
            self.len,
            self.buf.capacity()
        );
        debug_assert_eq!(
            self.buf.is_allocated(),
            self.buf.capacity() != 0,
            "buffer presence disagrees with capacity"
        );
    }
}

impl<T> Drop for GrowVec<T> {
    fn drop(&mut self) {
        // SAFETY: [0, len) are live; the RawBuf field frees the allocation
        // after this returns.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.as_ptr(), self.len));
        }
    }
}

impl<T> Default for GrowVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for GrowVec<T> {
    /// Copy construction. The clone gets its own buffer with the same
    /// capacity as `self`.
    ///
    /// If an element's `clone` panics, the elements cloned so far are
    /// dropped and the new buffer is freed; `self` is untouched.
    fn clone(&self) -> Self {
        let mut out = Self {
            buf: RawBuf::allocate(self.buf.capacity()),
            len: 0,
        };
        for item in self.as_slice() {
            // SAFETY: out.len < self.len <= out.capacity, and the slot is
            // uninitialized. len is bumped only after the write, so a
            // panicking clone leaves `out` consistent for its Drop.
            unsafe { out.buf.slot(out.len).write(item.clone()) };
            out.len += 1;
        }
        out
    }

    /// Copy assignment. Drops this container's elements and frees its
    /// buffer, then clones `source` as [`clone`](Clone::clone) does.
    ///
    /// Assigning a container to itself is a no-op.
    fn clone_from(&mut self, source: &Self) {
        if ptr::eq(self, source) {
            return;
        }
        self.release();
        *self = source.clone();
    }
}

impl<T> Index<usize> for GrowVec<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(item) => item,
            None => panic!(
                "index {index} out of bounds for GrowVec of length {}",
                self.len
            ),
        }
    }
}

impl<T> IndexMut<usize> for GrowVec<T> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        match self.get_mut(index) {
            Some(item) => item,
            None => panic!("index {index} out of bounds for GrowVec of length {len}"),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
