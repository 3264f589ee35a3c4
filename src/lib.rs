//! Ordered collections on top of bisection search.
//!
//! [`bisect`] holds the search primitives, [`OrderedArray`] and
//! [`OrderedArraySet`] keep a `Vec` sorted with them.

pub mod bisect;

mod error;
pub use error::*;

mod iterator;
pub use iterator::*;

mod ordered_array;
pub use ordered_array::*;

mod set;
pub use set::*;
