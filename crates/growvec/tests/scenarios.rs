//! End-to-end usage scenarios for `GrowVec`.

use growvec::GrowVec;

fn filled(n: i32) -> GrowVec<i32> {
    let mut v = GrowVec::new();
    for i in 0..n {
        v.push(i);
    }
    v
}

// ── Append / pop / clear walk-through ───────────────────────────────

#[test]
fn push_pop_clear_reuses_capacity() {
    let mut v = GrowVec::new();
    let mut caps = Vec::new();
    for i in 0..3 {
        v.push(i);
        caps.push(v.capacity());
    }
    assert_eq!(caps, vec![1, 2, 4]);
    assert_eq!(v.len(), 3);
    assert_eq!(*v.back(), 2);

    assert_eq!(v.pop(), Some(2));
    assert_eq!(v.len(), 2);
    assert_eq!(*v.back(), 1);

    v.clear();
    assert_eq!(v.len(), 0);
    assert!(v.is_empty());

    let ptr = v.as_ptr();
    v.push(99);
    assert_eq!(v.len(), 1);
    assert_eq!(*v.back(), 99);
    assert_eq!(v.capacity(), 4);
    assert_eq!(v.as_ptr(), ptr, "push after clear must not reallocate");
}

#[test]
fn clear_then_refill_to_prior_capacity_without_realloc() {
    let mut v = filled(7);
    let cap = v.capacity();
    let ptr = v.as_ptr();
    v.clear();
    for i in 0..cap as i32 {
        v.push(i);
    }
    assert_eq!(v.len(), cap);
    assert_eq!(v.as_ptr(), ptr);
}

#[test]
fn pop_until_empty_then_noop() {
    let mut v = filled(3);
    let cap = v.capacity();
    while v.pop().is_some() {}
    assert_eq!(v.pop(), None);
    assert_eq!(v.len(), 0);
    assert_eq!(v.capacity(), cap);
}

// ── Copy independence ───────────────────────────────────────────────

#[test]
fn appending_to_clone_leaves_source_alone() {
    let a = filled(5);
    let mut b = a.clone();
    b.push(5);
    assert_eq!(a.len(), 5);
    assert_eq!(a.as_slice(), &[0, 1, 2, 3, 4]);
    assert_eq!(b.len(), 6);
}

#[test]
fn mutating_source_leaves_clone_alone() {
    let mut a = filled(4);
    let b = a.clone();
    a[0] = 100;
    a.pop();
    a.push(7);
    assert_eq!(b.as_slice(), &[0, 1, 2, 3]);
}

#[test]
fn clone_from_keeps_buffers_separate() {
    let a = filled(3);
    let mut b = filled(10);
    b.clone_from(&a);
    assert_eq!(b.as_slice(), a.as_slice());
    assert_ne!(b.as_ptr(), a.as_ptr());
    b.push(3);
    assert_eq!(a.len(), 3);
}

#[test]
fn reassigning_own_clone_is_unchanged() {
    let mut a = filled(4);
    a = a.clone();
    assert_eq!(a.as_slice(), &[0, 1, 2, 3]);
    assert_eq!(a.capacity(), 4);
}

// ── Moves ───────────────────────────────────────────────────────────

#[test]
fn take_transfers_elements_in_order() {
    let mut a = filled(6);
    let b = a.take();
    assert_eq!(b.as_slice(), &[0, 1, 2, 3, 4, 5]);
    assert_eq!(a.len(), 0);
    assert_eq!(a.capacity(), 0);

    a.push(42);
    assert_eq!(a.as_slice(), &[42]);
}

#[test]
fn move_from_replaces_target() {
    let mut a = filled(2);
    let mut b = filled(8);
    b.move_from(&mut a);
    assert_eq!(b.as_slice(), &[0, 1]);
    assert!(a.is_empty());
    a.push(1);
    assert_eq!(a.len(), 1);
}

#[test]
fn taking_and_restoring_is_identity() {
    let mut a = filled(5);
    let ptr = a.as_ptr();
    let cap = a.capacity();
    let tmp = a.take();
    a = tmp;
    assert_eq!(a.as_slice(), &[0, 1, 2, 3, 4]);
    assert_eq!(a.as_ptr(), ptr);
    assert_eq!(a.capacity(), cap);
}

#[test]
fn by_value_move_keeps_buffer() {
    let a = filled(3);
    let ptr = a.as_ptr();
    let b = a;
    assert_eq!(b.as_ptr(), ptr);
    assert_eq!(b.as_slice(), &[0, 1, 2]);
}

// ── Strings (non-trivial Drop and Clone) ────────────────────────────

#[test]
fn owned_strings_survive_growth() {
    let mut v = GrowVec::new();
    for i in 0..50 {
        v.push(format!("item-{i}"));
    }
    for i in 0..50 {
        assert_eq!(v[i], format!("item-{i}"));
    }
    let copy = v.clone();
    v.clear();
    assert_eq!(copy.len(), 50);
    assert_eq!(copy.back(), "item-49");
}
