//! A growable, contiguous array with explicit lifecycle control.
//!
//! [`GrowVec<T>`] owns one heap buffer, tracks how many of its leading
//! slots hold live values, and grows by ~1.5x when an append finds it
//! full. Every element is constructed and dropped exactly once, across
//! reallocation, cloning, and ownership transfer.
//!
//! # Architecture
//!
//! ```text
//! GrowVec<T>            (vec.rs: initialized-prefix bookkeeping)
//! ├── len               slots [0, len) are live
//! └── RawBuf<T>         (raw.rs: owns the allocation, never drops T)
//!     └── capacity      slots [len, capacity) are uninitialized
//! ```
//!
//! Growth arithmetic lives in [`growth`]; failures that callers can
//! observe as values are [`GrowError`].
//!
//! # Value semantics
//!
//! - **Copy:** [`Clone::clone`] allocates a new buffer of the source's
//!   capacity; [`Clone::clone_from`] frees the target first.
//! - **Move:** [`GrowVec::take`] and [`GrowVec::move_from`] transfer the
//!   buffer in O(1) and leave the source empty but usable.
//!
//! # Safety
//!
//! `unsafe` is confined to `raw.rs` and `vec.rs`. Each block states the
//! slot-state invariant it relies on.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod error;
pub mod growth;
mod raw;
pub mod vec;

pub use error::GrowError;
pub use vec::GrowVec;
