//! Capacity growth policy.
//!
//! The policy is fixed at compile time. When a push finds the buffer full,
//! the new capacity is
//!
//! ```text
//! new = old + old * GROWTH_NUMERATOR / GROWTH_DENOMINATOR + GROWTH_INCREMENT
//!     = old + old / 2 + 1
//! ```
//!
//! computed in integer arithmetic, so the sequence from an empty container
//! is `0, 1, 2, 4, 7, 11, 17, 26, ...`.

/// Numerator of the fractional part of the growth factor.
pub const GROWTH_NUMERATOR: usize = 1;

/// Denominator of the fractional part of the growth factor.
pub const GROWTH_DENOMINATOR: usize = 2;

/// Fixed slot increment added on every growth step.
pub const GROWTH_INCREMENT: usize = 1;

/// Capacity that follows `old` under the growth policy.
///
/// Returns `None` if the result does not fit in `usize`.
pub const fn next_capacity(old: usize) -> Option<usize> {
    // old / 2 never overflows, so only the two additions are checked.
    let scaled = old / GROWTH_DENOMINATOR * GROWTH_NUMERATOR;
    match old.checked_add(scaled) {
        Some(sum) => sum.checked_add(GROWTH_INCREMENT),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grows_from_zero() {
        assert_eq!(next_capacity(0), Some(1));
    }

    #[test]
    fn sequence_from_empty() {
        let mut cap = 0;
        let mut seen = Vec::new();
        for _ in 0..8 {
            cap = next_capacity(cap).unwrap();
            seen.push(cap);
        }
        assert_eq!(seen, vec![1, 2, 4, 7, 11, 17, 26, 40]);
    }

    #[test]
    fn odd_capacity_rounds_down() {
        // 7 / 2 == 3, not 3.5.
        assert_eq!(next_capacity(7), Some(11));
    }

    #[test]
    fn overflow_is_reported() {
        assert_eq!(next_capacity(usize::MAX), None);
        assert_eq!(next_capacity(usize::MAX / 3 * 2 + 2), None);
    }

    #[test]
    fn near_limit_still_grows() {
        let old = usize::MAX / 2;
        assert_eq!(next_capacity(old), Some(old + old / 2 + 1));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn always_strictly_larger(old in 0usize..usize::MAX / 2) {
                let new = next_capacity(old).unwrap();
                prop_assert!(new > old);
            }

            #[test]
            fn matches_closed_form(old in 0usize..1_000_000) {
                prop_assert_eq!(next_capacity(old), Some(old + old / 2 + 1));
            }
        }
    }
}
