use std::{borrow::Borrow, ops::Index, slice};

use crate::{bisect, Iter, Occurrences, OutOfRange};

/// A `Vec` backed sequence that keeps its values in ascending order.
///
/// Duplicates are allowed. Among equal values the array is stable: a new
/// value lands after every value equal to it, and [`delete`] takes the last
/// one out again. [`search`] reports the first one.
///
/// # Example
/// ```rust
/// use bisect_array::OrderedArray;
///
/// let mut array = OrderedArray::new();
/// array.insert("c");
/// array.insert("a");
/// array.insert("c");
/// array.insert("b");
///
/// assert_eq!(array.as_slice(), &["a", "b", "c", "c"]);
/// assert_eq!(array.search("c"), Some(2));
/// assert_eq!(array.delete("c"), Some(3));
/// assert_eq!(array.as_slice(), &["a", "b", "c"]);
/// ```
///
/// [`delete`]: OrderedArray::delete
/// [`search`]: OrderedArray::search
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderedArray<T> {
    arr: Vec<T>,
}

impl<T> Default for OrderedArray<T> {
    fn default() -> Self {
        Self { arr: Vec::new() }
    }
}

impl<T> OrderedArray<T> {
    /// Create an empty array
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty array with room for `capacity` values
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arr: Vec::with_capacity(capacity),
        }
    }

    /// Returns value count
    #[inline]
    pub fn len(&self) -> usize {
        self.arr.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the value at `index`.
    ///
    /// Time O(1) and space O(1).
    ///
    /// # Examples
    /// ```rust
    /// use bisect_array::OrderedArray;
    ///
    /// let array = OrderedArray::from_sorted(vec![1, 2, 3, 4]);
    /// assert_eq!(array.read(0), Ok(&1));
    /// assert_eq!(array.read(3), Ok(&4));
    /// assert!(array.read(4).is_err());
    /// ```
    pub fn read(&self, index: usize) -> Result<&T, OutOfRange> {
        self.arr.get(index).ok_or(OutOfRange {
            index,
            len: self.len(),
        })
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.arr.get(index)
    }

    /// Smallest value
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.arr.first()
    }

    /// Largest value
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.arr.last()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.arr
    }

    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.arr
    }

    pub fn clear(&mut self) {
        self.arr.clear();
    }

    /// Returns an iterator over `(index, value)` pairs in ascending order.
    ///
    /// # Examples
    /// ```rust
    /// use bisect_array::OrderedArray;
    ///
    /// let array = OrderedArray::from_sorted(vec!['x', 'y']);
    /// let pairs: Vec<_> = array.iter().collect();
    /// assert_eq!(pairs, vec![(0, &'x'), (1, &'y')]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.arr)
    }

    /// Returns an iterator over the values in ascending order
    pub fn values(&self) -> slice::Iter<'_, T> {
        self.arr.iter()
    }
}

impl<T: Ord> OrderedArray<T> {
    /// Wrap a vector that is already sorted in ascending order.
    ///
    /// The order is trusted, not checked, outside of debug builds. Use
    /// `collect()` for input that may be unsorted.
    pub fn from_sorted(arr: Vec<T>) -> Self {
        debug_assert!(
            arr.windows(2).all(|w| w[0] <= w[1]),
            "from_sorted requires ascending input"
        );

        Self { arr }
    }

    /// Returns the index of the first value equal to `value`, or `None`.
    ///
    /// Time O(log(n)) and space O(1).
    ///
    /// # Examples
    /// ```rust
    /// use bisect_array::OrderedArray;
    ///
    /// let array = OrderedArray::from_sorted(vec![1, 1, 1, 2]);
    /// assert_eq!(array.search(&1), Some(0));
    /// assert_eq!(array.search(&3), None);
    /// ```
    pub fn search<Q>(&self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        match bisect::left_search(&self.arr, value) {
            (idx, true) => Some(idx),
            (_, false) => None,
        }
    }

    /// Returns how many values are equal to `value`.
    ///
    /// Time O(log(n)) and space O(1).
    pub fn count<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let (start, _) = bisect::left_search(&self.arr, value);
        let (end, _) = bisect::right_search(&self.arr[start..], value);
        end
    }

    /// Insert `value` after every value equal to it, returns the index it
    /// landed at.
    ///
    /// Time O(n) and space O(1).
    ///
    /// # Examples
    /// ```rust
    /// use bisect_array::OrderedArray;
    ///
    /// let mut array = OrderedArray::from_sorted(vec!["a", "c"]);
    /// assert_eq!(array.insert("b"), 1);
    /// assert_eq!(array.as_slice(), &["a", "b", "c"]);
    /// ```
    pub fn insert(&mut self, value: T) -> usize {
        let (idx, _) = bisect::right_search(&self.arr, &value);
        self.arr.insert(idx, value);

        #[cfg(test)]
        self.validate();

        idx
    }

    /// Remove the last value equal to `value`, returns the index it was
    /// removed from.
    ///
    /// Time O(n) and space O(1).
    ///
    /// # Examples
    /// ```rust
    /// use bisect_array::OrderedArray;
    ///
    /// let mut array = OrderedArray::from_sorted(vec![1, 1, 2, 2]);
    /// assert_eq!(array.delete(&1), Some(1));
    /// assert_eq!(array.delete(&7), None);
    /// assert_eq!(array.as_slice(), &[1, 2, 2]);
    /// ```
    pub fn delete<Q>(&mut self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let idx = self.last_index_of(value)?;
        self.arr.remove(idx);

        #[cfg(test)]
        self.validate();

        Some(idx)
    }

    /// Same as [`delete`](OrderedArray::delete), but hands back the removed
    /// value instead of its index.
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let idx = self.last_index_of(value)?;
        let removed = self.arr.remove(idx);

        #[cfg(test)]
        self.validate();

        Some(removed)
    }

    /// Returns each distinct value once, paired with how many times it occurs.
    ///
    /// # Examples
    /// ```rust
    /// use bisect_array::OrderedArray;
    ///
    /// let array = OrderedArray::from_sorted(vec!['a', 'a', 'b', 'c', 'c', 'c']);
    /// let groups: Vec<_> = array.occurrences().collect();
    /// assert_eq!(groups, vec![(&'a', 2), (&'b', 1), (&'c', 3)]);
    /// ```
    pub fn occurrences(&self) -> Occurrences<'_, T> {
        Occurrences::new(&self.arr)
    }

    fn last_index_of<Q>(&self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        match bisect::right_search(&self.arr, value) {
            // found means arr[idx - 1] == value
            (idx, true) => Some(idx - 1),
            (_, false) => None,
        }
    }

    #[cfg(test)]
    fn validate(&self) {
        for (idx, pair) in self.arr.windows(2).enumerate() {
            assert!(pair[0] <= pair[1], "out of order at {idx}");
        }
    }
}

impl<T> Index<usize> for OrderedArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match self.arr.get(index) {
            Some(value) => value,
            None => panic!(
                "{}",
                OutOfRange {
                    index,
                    len: self.len()
                }
            ),
        }
    }
}

impl<T: Ord> FromIterator<T> for OrderedArray<T> {
    /// Collect and sort, duplicates keep their relative order.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut arr: Vec<T> = iter.into_iter().collect();
        arr.sort();
        Self { arr }
    }
}

impl<T> IntoIterator for OrderedArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.arr.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a OrderedArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values()
    }
}
