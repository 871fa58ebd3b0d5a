//! Container error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur while growing a [`GrowVec`](crate::GrowVec).
///
/// Only [`GrowVec::try_push`](crate::GrowVec::try_push) surfaces these as
/// values. The infallible entry points panic on `CapacityOverflow` and
/// route `AllocFailed` to [`std::alloc::handle_alloc_error`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GrowError {
    /// The requested element count cannot be represented as an allocation:
    /// the growth arithmetic overflowed `usize`, or the byte size would
    /// exceed `isize::MAX`.
    CapacityOverflow {
        /// Element count that was requested.
        requested_len: usize,
    },
    /// The global allocator returned null.
    AllocFailed {
        /// Size of the failed request in bytes.
        bytes: usize,
        /// Alignment of the failed request.
        align: usize,
    },
}

impl fmt::Display for GrowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityOverflow { requested_len } => {
                write!(f, "capacity overflow: cannot hold {requested_len} elements")
            }
            Self::AllocFailed { bytes, align } => {
                write!(
                    f,
                    "allocation failed: {bytes} bytes with alignment {align}"
                )
            }
        }
    }
}

impl Error for GrowError {}
