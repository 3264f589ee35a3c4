/// Returned when a position outside `0..len` is read.
///
/// # Examples
///
/// ```rust
/// use bisect_array::{OrderedArray, OutOfRange};
///
/// let array = OrderedArray::from_sorted(vec![1, 2, 3, 4]);
/// let error = array.read(4).unwrap_err();
///
/// assert_eq!(error, OutOfRange { index: 4, len: 4 });
/// assert_eq!(error.to_string(), "index out of range [4] with length 4");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRange {
    /// The requested position.
    pub index: usize,
    /// Length of the container at the time of the read.
    pub len: usize,
}

impl std::fmt::Display for OutOfRange {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "index out of range [{}] with length {}",
            self.index, self.len
        )
    }
}

impl std::error::Error for OutOfRange {}
