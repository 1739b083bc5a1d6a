// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Phantom-tagged, strongly typed indices.
//!
//! The allocator juggles slot indices alongside slot counts, widths, and
//! granularities, all of which are plain integers. `TypedIndex<T>` wraps a
//! `usize` with a zero-cost tag so a slot index cannot silently stand in for
//! one of the others. Arithmetic with `usize` is provided for the modular
//! lattice math the alignment search performs.
//!
//! ```rust
//! use flexgrid_core::utils::index::{TypedIndex, TypedIndexTag};
//!
//! #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
//! struct SlotTag;
//! impl TypedIndexTag for SlotTag {
//!     const NAME: &'static str = "SlotIndex";
//! }
//!
//! type SlotIndex = TypedIndex<SlotTag>;
//! let slot = SlotIndex::new(284);
//! assert_eq!((slot % 8).get(), 4);
//! assert_eq!(format!("{}", slot), "SlotIndex(284)");
//! ```

/// A trait to tag typed indices with a name for debugging and display purposes.
pub trait TypedIndexTag: Clone {
    const NAME: &'static str;
}

/// A strongly typed index associated with a tag type `T`.
///
/// `#[repr(transparent)]` over `usize`; the tag exists only at compile time.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypedIndex<T> {
    index: usize,
    _marker: std::marker::PhantomData<T>,
}

impl<T> TypedIndex<T> {
    /// Creates a new `TypedIndex` with the given `usize` index.
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            _marker: std::marker::PhantomData,
        }
    }

    /// Returns the underlying `usize` index.
    #[inline(always)]
    pub const fn get(&self) -> usize {
        self.index
    }

    /// Checks if the index is zero.
    #[inline(always)]
    pub const fn is_zero(&self) -> bool {
        self.index == 0
    }
}

impl<T> Default for TypedIndex<T> {
    #[inline]
    fn default() -> Self {
        Self::new(0)
    }
}

impl<T> std::ops::Add<usize> for TypedIndex<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: usize) -> Self::Output {
        Self::new(self.index + rhs)
    }
}

impl<T> std::ops::Sub<usize> for TypedIndex<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: usize) -> Self::Output {
        Self::new(self.index - rhs)
    }
}

impl<T> std::ops::Rem<usize> for TypedIndex<T> {
    type Output = Self;

    #[inline]
    fn rem(self, rhs: usize) -> Self::Output {
        Self::new(self.index % rhs)
    }
}

impl<T> From<usize> for TypedIndex<T> {
    #[inline]
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl<T> From<TypedIndex<T>> for usize {
    #[inline]
    fn from(index: TypedIndex<T>) -> Self {
        index.index
    }
}

impl<T> std::fmt::Display for TypedIndex<T>
where
    T: TypedIndexTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.index)
    }
}

impl<T> std::fmt::Debug for TypedIndex<T>
where
    T: TypedIndexTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
    struct TestTag;

    impl TypedIndexTag for TestTag {
        const NAME: &'static str = "TestIndex";
    }

    type TestIndex = TypedIndex<TestTag>;

    #[test]
    fn test_new_and_get() {
        let index = TestIndex::new(42);
        assert_eq!(index.get(), 42);
        assert!(!index.is_zero());
        assert!(TestIndex::default().is_zero());
    }

    #[test]
    fn test_arithmetic_with_usize() {
        let index = TestIndex::new(284);
        assert_eq!((index + 8).get(), 292);
        assert_eq!((index - 4).get(), 280);
        assert_eq!((index % 8).get(), 4);
    }

    #[test]
    fn test_ordering_and_equality() {
        assert!(TestIndex::new(3) < TestIndex::new(5));
        assert_eq!(TestIndex::new(7), TestIndex::new(7));
    }

    #[test]
    fn test_conversions() {
        let index: TestIndex = 9usize.into();
        let raw: usize = index.into();
        assert_eq!(raw, 9);
    }

    #[test]
    fn test_display_and_debug() {
        let index = TestIndex::new(5);
        assert_eq!(format!("{}", index), "TestIndex(5)");
        assert_eq!(format!("{:?}", index), "TestIndex(5)");
    }
}
