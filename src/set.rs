use std::{borrow::Borrow, slice};

use crate::bisect;

/// A collection that holds each value at most once.
///
/// Code that only needs membership should be written against this trait,
/// the backing representation is up to the implementation.
///
/// # Examples
/// ```rust
/// use bisect_array::{ArraySet, OrderedArraySet, Set};
///
/// fn fill<S: Set<u32>>(set: &mut S) -> usize {
///     (0..10u32).filter(|v| set.add(v % 4)).count()
/// }
///
/// assert_eq!(fill(&mut OrderedArraySet::new()), 4);
/// assert_eq!(fill(&mut ArraySet::new()), 4);
/// ```
pub trait Set<T> {
    type Values<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Reports whether `value` is in the set
    fn has(&self, value: &T) -> bool;

    /// Adds `value`, returns false and leaves the set untouched if an equal
    /// value is already present
    fn add(&mut self, value: T) -> bool;

    /// Removes `value`, returns false if it wasn't present
    fn remove(&mut self, value: &T) -> bool;

    /// Iterates over every member once
    fn values(&self) -> Self::Values<'_>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A [`Set`] kept as a sorted, duplicate free `Vec`.
///
/// Membership is O(log(n)), `add` and `remove` are O(n) because of the
/// shift. Values iterate in ascending order.
///
/// # Examples
/// ```rust
/// use bisect_array::OrderedArraySet;
///
/// let mut set = OrderedArraySet::new();
/// assert!(set.add("b"));
/// assert!(set.add("a"));
/// assert!(!set.add("a"));
///
/// assert!(set.has("a"));
/// assert_eq!(set.values().collect::<Vec<_>>(), vec![&"a", &"b"]);
///
/// assert!(set.remove("a"));
/// assert!(!set.remove("a"));
/// assert_eq!(set.as_slice(), &["b"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderedArraySet<T> {
    arr: Vec<T>,
}

impl<T> Default for OrderedArraySet<T> {
    fn default() -> Self {
        Self { arr: Vec::new() }
    }
}

impl<T> OrderedArraySet<T> {
    /// Create an empty set
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.arr.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Members in ascending order
    #[inline]
    pub fn values(&self) -> slice::Iter<'_, T> {
        self.arr.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.arr
    }

    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.arr.first()
    }

    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.arr.last()
    }

    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.arr
    }
}

impl<T: Ord> OrderedArraySet<T> {
    /// Wrap a vector that is sorted ascending and holds no duplicates.
    ///
    /// Neither property is checked outside of debug builds.
    pub fn from_sorted(arr: Vec<T>) -> Self {
        debug_assert!(
            arr.windows(2).all(|w| w[0] < w[1]),
            "from_sorted requires strictly ascending input"
        );

        Self { arr }
    }

    /// Time O(log(n)) and space O(1).
    pub fn has<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        bisect::search(&self.arr, value).is_some()
    }

    /// Time O(n) and space O(1).
    pub fn add(&mut self, value: T) -> bool {
        let (idx, found) = bisect::left_search(&self.arr, &value);
        if found {
            return false;
        }

        self.arr.insert(idx, value);

        #[cfg(test)]
        self.validate();

        true
    }

    /// Time O(n) and space O(1).
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let (idx, found) = bisect::left_search(&self.arr, value);
        if !found {
            return false;
        }

        self.arr.remove(idx);

        #[cfg(test)]
        self.validate();

        true
    }

    #[cfg(test)]
    fn validate(&self) {
        for (idx, pair) in self.arr.windows(2).enumerate() {
            assert!(pair[0] < pair[1], "not strictly ascending at {idx}");
        }
    }
}

impl<T: Ord> Set<T> for OrderedArraySet<T> {
    type Values<'a> = slice::Iter<'a, T> where T: 'a;

    fn has(&self, value: &T) -> bool {
        OrderedArraySet::has(self, value)
    }

    fn add(&mut self, value: T) -> bool {
        OrderedArraySet::add(self, value)
    }

    fn remove(&mut self, value: &T) -> bool {
        OrderedArraySet::remove(self, value)
    }

    fn values(&self) -> Self::Values<'_> {
        OrderedArraySet::values(self)
    }

    fn len(&self) -> usize {
        OrderedArraySet::len(self)
    }
}

impl<T: Ord> FromIterator<T> for OrderedArraySet<T> {
    /// Collect, sort and drop duplicates, the first of equal values is kept.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut arr: Vec<T> = iter.into_iter().collect();
        arr.sort();
        arr.dedup();
        Self { arr }
    }
}

impl<T> IntoIterator for OrderedArraySet<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.arr.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a OrderedArraySet<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values()
    }
}

/// A naive [`Set`] on top of an unsorted `Vec`, every operation scans.
///
/// Only needs `PartialEq`, and keeps values in the order they were added.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArraySet<T> {
    arr: Vec<T>,
}

impl<T> Default for ArraySet<T> {
    fn default() -> Self {
        Self { arr: Vec::new() }
    }
}

impl<T: PartialEq> ArraySet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    fn index_of(&self, value: &T) -> Option<usize> {
        self.arr.iter().position(|v| v == value)
    }
}

impl<T: PartialEq> Set<T> for ArraySet<T> {
    type Values<'a> = slice::Iter<'a, T> where T: 'a;

    /// Time O(n) and space O(1).
    fn has(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// Time O(n) and space O(1).
    fn add(&mut self, value: T) -> bool {
        if self.has(&value) {
            return false;
        }

        self.arr.push(value);
        true
    }

    /// Time O(n) and space O(1).
    fn remove(&mut self, value: &T) -> bool {
        match self.index_of(value) {
            Some(idx) => {
                self.arr.remove(idx);
                true
            }
            None => false,
        }
    }

    fn values(&self) -> Self::Values<'_> {
        self.arr.iter()
    }

    fn len(&self) -> usize {
        self.arr.len()
    }
}

impl<T: PartialEq> FromIterator<T> for ArraySet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for value in iter {
            set.add(value);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use rand::{seq::SliceRandom, Rng};

    use super::*;

    #[test]
    fn test_has() {
        let cases: [(&[&str], &str, bool); 4] = [
            (&[], "a", false),
            (&["a"], "a", true),
            (&["a", "b", "c"], "c", true),
            (&["a", "b", "c"], "bb", false),
        ];

        for (arr, value, expected) in cases {
            let set = OrderedArraySet::from_sorted(arr.to_vec());
            assert_eq!(set.has(value), expected, "{arr:?}.has({value})");
        }
    }

    #[test]
    fn test_add() {
        let cases: [(&[&str], &str, bool, &[&str]); 4] = [
            (&[], "a", true, &["a"]),
            (&["a"], "b", true, &["a", "b"]),
            (&["a", "b"], "a", false, &["a", "b"]),
            (&["b", "d"], "c", true, &["b", "c", "d"]),
        ];

        for (arr, value, expected, expected_arr) in cases {
            let mut set = OrderedArraySet::from_sorted(arr.to_vec());
            assert_eq!(set.add(value), expected, "{arr:?}.add({value})");
            assert_eq!(set.as_slice(), expected_arr);
        }
    }

    #[test]
    fn test_remove() {
        let cases: [(&[&str], &str, bool, &[&str]); 4] = [
            (&[], "a", false, &[]),
            (&["a"], "a", true, &[]),
            (&["a", "b", "c"], "b", true, &["a", "c"]),
            (&["a", "c"], "b", false, &["a", "c"]),
        ];

        for (arr, value, expected, expected_arr) in cases {
            let mut set = OrderedArraySet::from_sorted(arr.to_vec());
            assert_eq!(set.remove(value), expected, "{arr:?}.remove({value})");
            assert_eq!(set.as_slice(), expected_arr);
        }
    }

    #[test]
    fn test_add_remove_sequence() {
        let mut set = OrderedArraySet::new();
        assert!(set.add("a"));
        assert_eq!(set.as_slice(), &["a"]);
        assert!(!set.add("a"));
        assert_eq!(set.as_slice(), &["a"]);
        assert!(set.add("b"));
        assert_eq!(set.as_slice(), &["a", "b"]);
        assert!(set.remove("a"));
        assert_eq!(set.as_slice(), &["b"]);
        assert!(!set.remove("a"));
        assert_eq!(set.as_slice(), &["b"]);
    }

    fn exercise<S: Set<u32>>(mut set: S) {
        assert!(set.is_empty());
        for v in [5, 1, 5, 3, 1] {
            set.add(v);
        }
        assert_eq!(set.len(), 3);
        assert!(set.has(&3));
        assert!(!set.has(&4));

        let mut members: Vec<_> = set.values().copied().collect();
        members.sort();
        assert_eq!(members, vec![1, 3, 5]);

        assert!(set.remove(&5));
        assert!(!set.remove(&5));
        assert!(!set.has(&5));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_set_trait() {
        exercise(OrderedArraySet::new());
        exercise(ArraySet::new());
    }

    #[test]
    fn test_array_set_keeps_insertion_order() {
        let mut set: ArraySet<_> = ['c', 'a', 'c', 'b'].into_iter().collect();
        assert_eq!(set.values().collect::<String>(), "cab");
        assert!(set.remove(&'a'));
        assert_eq!(set.values().collect::<String>(), "cb");
    }

    #[test]
    fn test_from_iter_dedups() {
        let set: OrderedArraySet<_> = vec![4, 2, 4, 4, 1].into_iter().collect();
        assert_eq!(set.as_slice(), &[1, 2, 4]);
        assert_eq!(set.first(), Some(&1));
        assert_eq!(set.last(), Some(&4));
        assert_eq!((&set).into_iter().count(), 3);
        assert_eq!(set.into_vec(), vec![1, 2, 4]);
    }

    #[test]
    fn test_random_against_btree_set() {
        let mut rng = rand::thread_rng();
        let mut set = OrderedArraySet::new();
        let mut expected = BTreeSet::new();

        for _ in 0..3000 {
            let v: u16 = rng.gen_range(0..200);
            if rng.gen_bool(0.5) {
                assert_eq!(set.add(v), expected.insert(v));
            } else {
                assert_eq!(set.remove(&v), expected.remove(&v));
            }
            assert_eq!(set.has(&v), expected.contains(&v));
        }

        assert!(set.values().eq(expected.iter()));

        let mut keys: Vec<_> = expected.iter().copied().collect();
        keys.shuffle(&mut rng);
        for k in keys {
            assert!(set.remove(&k));
            assert!(!set.has(&k));
        }
        assert!(set.is_empty());
    }
}
