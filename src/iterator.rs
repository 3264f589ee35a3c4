use std::{iter::FusedIterator, slice};

/// A borrowed iterator over `(index, value)` pairs of an [`OrderedArray`].
///
/// Borrowed, so the array can't change while this is alive.
///
/// [`OrderedArray`]: crate::OrderedArray
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: std::iter::Enumerate<slice::Iter<'a, T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(arr: &'a [T]) -> Self {
        Self {
            inner: arr.iter().enumerate(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (usize, &'a T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

/// Groups equal neighbours, yielding each distinct value once with the size
/// of its run.
///
/// Each step walks the current run and stops at the first larger value, so
/// a run of `k` equal values costs at most `k + 1` comparisons and a step
/// never reads more than one value past its run.
#[derive(Debug, Clone)]
pub struct Occurrences<'a, T> {
    rest: &'a [T],
}

impl<'a, T> Occurrences<'a, T> {
    pub(crate) fn new(arr: &'a [T]) -> Self {
        Self { rest: arr }
    }
}

impl<'a, T: Ord> Iterator for Occurrences<'a, T> {
    type Item = (&'a T, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest;
        let value = rest.first()?;
        let end = rest.iter().take_while(|probe| *probe == value).count();

        self.rest = &rest[end..];
        Some((value, end))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.rest.len();
        (usize::from(len > 0), Some(len))
    }
}

impl<'a, T: Ord> FusedIterator for Occurrences<'a, T> {}
