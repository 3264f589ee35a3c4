//! Binary search over sorted slices.
//!
//! Every function here expects `seq` to be sorted in ascending order. An
//! unsorted slice never causes a panic, but the returned position is
//! meaningless.
//!
//! The `_by` variants take a comparator that orders a probed element against
//! the target, the same shape as [`slice::binary_search_by`].

use std::{borrow::Borrow, cmp::Ordering, marker::PhantomData};

/// Returns the index of some element equal to `value`, or `None`.
///
/// When `seq` holds duplicates of `value`, any one of them may be reported.
///
/// Time O(log(n)) and space O(1).
///
/// # Examples
/// ```rust
/// use bisect_array::bisect::search;
///
/// assert_eq!(search(&[1u32, 3, 5, 7], &5), Some(2));
/// assert_eq!(search(&[1u32, 3, 5, 7], &4), None);
/// ```
pub fn search<T, Q>(seq: &[T], value: &Q) -> Option<usize>
where
    T: Borrow<Q>,
    Q: ?Sized + Ord,
{
    search_by(seq, |probe| probe.borrow().cmp(value))
}

/// [`search`] with a comparator ordering each probed element against the target.
pub fn search_by<T, F>(seq: &[T], mut f: F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    let mut left = 0;
    let mut right = seq.len();

    while left < right {
        let mid = left + (right - left) / 2;
        match f(&seq[mid]) {
            Ordering::Less => left = mid + 1,
            Ordering::Greater => right = mid,
            Ordering::Equal => return Some(mid),
        }
    }

    None
}

/// Returns the first index at which `value` can be inserted while keeping
/// `seq` sorted, that is the first `i` with `seq[i] >= value` (or
/// `seq.len()`), and whether an element equal to `value` exists.
///
/// Time O(log(n)) and space O(1).
///
/// # Examples
/// ```rust
/// use bisect_array::bisect::left_search;
///
/// assert_eq!(left_search(&["b", "d", "f"], "c"), (1, false));
/// assert_eq!(left_search(&["b", "d", "f"], "d"), (1, true));
/// assert_eq!(left_search::<&str, str>(&[], "d"), (0, false));
/// ```
pub fn left_search<T, Q>(seq: &[T], value: &Q) -> (usize, bool)
where
    T: Borrow<Q>,
    Q: ?Sized + Ord,
{
    left_search_by(seq, |probe| probe.borrow().cmp(value))
}

/// [`left_search`] with a comparator ordering each probed element against the target.
pub fn left_search_by<T, F>(seq: &[T], mut f: F) -> (usize, bool)
where
    F: FnMut(&T) -> Ordering,
{
    let mut left = 0;
    // exclusive, `right - 1` is the last candidate
    let mut right = seq.len();
    let mut found = false;

    while left < right {
        let mid = left + (right - left) / 2;
        match f(&seq[mid]) {
            Ordering::Less => left = mid + 1,
            cmp => {
                found |= cmp == Ordering::Equal;
                right = mid;
            }
        }
    }

    (left, found)
}

/// Returns the first index at which `value` can be inserted after every
/// element equal to it, that is the first `i` with `seq[i] > value` (or
/// `seq.len()`), and whether an element equal to `value` exists.
///
/// Time O(log(n)) and space O(1).
///
/// # Examples
/// ```rust
/// use bisect_array::bisect::right_search;
///
/// assert_eq!(right_search(&["b", "d", "f"], "c"), (1, false));
/// assert_eq!(right_search(&["b", "d", "f"], "d"), (2, true));
/// assert_eq!(right_search(&[2u32, 2, 2], &2), (3, true));
/// ```
pub fn right_search<T, Q>(seq: &[T], value: &Q) -> (usize, bool)
where
    T: Borrow<Q>,
    Q: ?Sized + Ord,
{
    right_search_by(seq, |probe| probe.borrow().cmp(value))
}

/// [`right_search`] with a comparator ordering each probed element against the target.
pub fn right_search_by<T, F>(seq: &[T], mut f: F) -> (usize, bool)
where
    F: FnMut(&T) -> Ordering,
{
    let mut left = 0;
    let mut right = seq.len();
    let mut found = false;

    while left < right {
        let mid = left + (right - left) / 2;
        match f(&seq[mid]) {
            Ordering::Greater => right = mid,
            cmp => {
                found |= cmp == Ordering::Equal;
                left = mid + 1;
            }
        }
    }

    (left, found)
}

/// Bisection strategy over a slice of keys.
///
/// Implementations must agree with each other on every sorted input, which
/// lets a slow but obvious one serve as the oracle for a fast one.
pub trait Bisector {
    type Key: Ord;

    /// index of some key equal to `k`
    fn search(keys: &[Self::Key], k: &Self::Key) -> Option<usize>;

    /// same result as [`left_search`]
    fn left_search(keys: &[Self::Key], k: &Self::Key) -> (usize, bool);

    /// same result as [`right_search`]
    fn right_search(keys: &[Self::Key], k: &Self::Key) -> (usize, bool);
}

pub struct BinarySearch<K>(PhantomData<K>);

impl<K: Ord> Bisector for BinarySearch<K> {
    type Key = K;

    #[inline]
    fn search(keys: &[Self::Key], k: &Self::Key) -> Option<usize> {
        search(keys, k)
    }

    #[inline]
    fn left_search(keys: &[Self::Key], k: &Self::Key) -> (usize, bool) {
        left_search(keys, k)
    }

    #[inline]
    fn right_search(keys: &[Self::Key], k: &Self::Key) -> (usize, bool) {
        right_search(keys, k)
    }
}

/// Scans from the front. O(n), only useful as a reference.
pub struct LinearSearch<K>(PhantomData<K>);

impl<K: Ord> Bisector for LinearSearch<K> {
    type Key = K;

    #[inline(never)]
    fn search(keys: &[Self::Key], k: &Self::Key) -> Option<usize> {
        keys.iter().position(|key| key == k)
    }

    #[inline(never)]
    fn left_search(keys: &[Self::Key], k: &Self::Key) -> (usize, bool) {
        let idx = keys.iter().position(|key| key >= k).unwrap_or(keys.len());
        (idx, keys.get(idx) == Some(k))
    }

    #[inline(never)]
    fn right_search(keys: &[Self::Key], k: &Self::Key) -> (usize, bool) {
        let idx = keys.iter().position(|key| key > k).unwrap_or(keys.len());
        let found = idx > 0 && keys[idx - 1] == *k;
        (idx, found)
    }
}
