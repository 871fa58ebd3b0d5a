//! Benchmark workloads for the growvec container.
//!
//! Shared builders so every bench compares `GrowVec`, `Vec`, and
//! `SmallVec` on identical inputs.

#![forbid(unsafe_code)]

use growvec::GrowVec;

/// Element counts exercised by the push and clone benches.
pub const SIZES: [usize; 3] = [16, 1_000, 100_000];

/// Build a `GrowVec<u64>` holding `0..n`.
pub fn growvec_of(n: usize) -> GrowVec<u64> {
    let mut v = GrowVec::new();
    for i in 0..n as u64 {
        v.push(i);
    }
    v
}

/// Build a `GrowVec<String>` of `n` short owned strings.
pub fn growvec_of_strings(n: usize) -> GrowVec<String> {
    let mut v = GrowVec::new();
    for i in 0..n {
        v.push(format!("s{i}"));
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_produce_requested_len() {
        assert_eq!(growvec_of(10).len(), 10);
        assert_eq!(growvec_of_strings(3).back(), "s2");
    }
}
