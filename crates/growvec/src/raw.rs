//! Raw buffer ownership over the global allocator.
//!
//! [`RawBuf`] owns exactly one allocation of `capacity` slots and knows
//! nothing about which slots hold live values. Dropping a `RawBuf` releases
//! the allocation without touching its contents; dropping initialized slots
//! first is the owner's job.
//!
//! Zero-sized element types never reach the allocator. Their buffer is a
//! dangling, well-aligned pointer once `capacity > 0`.

#![allow(unsafe_code)]

use std::alloc::{self, handle_alloc_error, Layout};
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::error::GrowError;

/// An owned, uninitialized allocation of `capacity` slots of `T`.
pub(crate) struct RawBuf<T> {
    /// `None` iff `cap == 0`.
    ptr: Option<NonNull<T>>,
    cap: usize,
    _marker: PhantomData<T>,
}

impl<T> RawBuf<T> {
    /// The unallocated buffer.
    pub(crate) const fn new() -> Self {
        Self {
            ptr: None,
            cap: 0,
            _marker: PhantomData,
        }
    }

    /// Allocate room for `capacity` slots, reporting failure as a value.
    pub(crate) fn try_allocate(capacity: usize) -> Result<Self, GrowError> {
        if capacity == 0 {
            return Ok(Self::new());
        }
        let layout = Layout::array::<T>(capacity).map_err(|_| GrowError::CapacityOverflow {
            requested_len: capacity,
        })?;
        let ptr = if layout.size() == 0 {
            NonNull::dangling()
        } else {
            // SAFETY: layout has non-zero size.
            let raw = unsafe { alloc::alloc(layout) };
            NonNull::new(raw.cast::<T>()).ok_or(GrowError::AllocFailed {
                bytes: layout.size(),
                align: layout.align(),
            })?
        };
        Ok(Self {
            ptr: Some(ptr),
            cap: capacity,
            _marker: PhantomData,
        })
    }

    /// Allocate room for `capacity` slots, treating failure as fatal.
    pub(crate) fn allocate(capacity: usize) -> Self {
        match Self::try_allocate(capacity) {
            Ok(buf) => buf,
            Err(err) => fail(err),
        }
    }

    /// Number of slots in the allocation.
    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    /// Whether an allocation (or, for zero-sized `T`, a dangling stand-in)
    /// is held.
    #[inline]
    pub(crate) fn is_allocated(&self) -> bool {
        self.ptr.is_some()
    }

    /// Base pointer of the buffer. Dangling but aligned when unallocated.
    #[inline]
    pub(crate) fn as_ptr(&self) -> *mut T {
        match self.ptr {
            Some(ptr) => ptr.as_ptr(),
            None => NonNull::dangling().as_ptr(),
        }
    }

    /// Pointer to slot `index`.
    ///
    /// # Safety
    ///
    /// `index` must be `<= capacity`.
    #[inline]
    pub(crate) unsafe fn slot(&self, index: usize) -> *mut T {
        debug_assert!(index <= self.cap);
        // SAFETY: caller keeps index within (or one past) the allocation.
        unsafe { self.as_ptr().add(index) }
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        let Some(ptr) = self.ptr else {
            return;
        };
        // The same layout succeeded in `try_allocate`, so this cannot fail.
        let Ok(layout) = Layout::array::<T>(self.cap) else {
            return;
        };
        if layout.size() != 0 {
            // SAFETY: ptr came from `alloc::alloc` with exactly this layout.
            unsafe { alloc::dealloc(ptr.as_ptr().cast::<u8>(), layout) };
        }
    }
}

/// Escalate a growth failure on an infallible path.
///
/// Allocator failures go through [`handle_alloc_error`] so that a custom
/// OOM hook sees them; capacity overflow panics.
#[cold]
#[track_caller]
pub(crate) fn fail(err: GrowError) -> ! {
    if let GrowError::AllocFailed { bytes, align } = err {
        if let Ok(layout) = Layout::from_size_align(bytes, align) {
            handle_alloc_error(layout);
        }
    }
    panic!("{err}");
}
