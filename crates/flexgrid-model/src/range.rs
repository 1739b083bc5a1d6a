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

use crate::{frequency::Frequency, grid::Grid, index::SlotIndex};

/// An inclusive range of frequency slots `[lower, upper]`.
///
/// This is the allocator's positive result: the contiguous block of slots a
/// new service will occupy. Both bounds are inclusive, so the width is
/// `upper - lower + 1`; the allocator only ever produces even widths,
/// because a center-aligned channel straddles its center symmetrically.
///
/// # Invariants
///
/// `lower` must always be less than or equal to `upper`. There is no way to
/// express "no range" with this type; the allocator's result enum carries
/// that case instead.
///
/// # Examples
///
/// ```rust
/// # use flexgrid_model::range::SpectrumRange;
/// # use flexgrid_model::index::SlotIndex;
///
/// let range = SpectrumRange::new(SlotIndex::new(4), SlotIndex::new(11));
/// assert_eq!(range.width(), 8);
/// assert!(range.contains(SlotIndex::new(4)));
/// assert!(range.contains(SlotIndex::new(11)));
/// assert!(!range.contains(SlotIndex::new(12)));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpectrumRange {
    lower: SlotIndex,
    upper: SlotIndex,
}

impl SpectrumRange {
    /// Creates a new `SpectrumRange`.
    ///
    /// # Panics
    ///
    /// Panics if `lower > upper`.
    #[inline]
    pub fn new(lower: SlotIndex, upper: SlotIndex) -> Self {
        assert!(
            lower <= upper,
            "called `SpectrumRange::new` with lower {} above upper {}",
            lower.get(),
            upper.get()
        );

        Self { lower, upper }
    }

    /// Creates a new `SpectrumRange` if the bounds are ordered.
    ///
    /// Returns `None` if `lower > upper`.
    #[inline]
    pub fn try_new(lower: SlotIndex, upper: SlotIndex) -> Option<Self> {
        if lower <= upper {
            Some(Self { lower, upper })
        } else {
            None
        }
    }

    /// Returns the inclusive lower bound.
    #[inline]
    pub const fn lower(&self) -> SlotIndex {
        self.lower
    }

    /// Returns the inclusive upper bound.
    #[inline]
    pub const fn upper(&self) -> SlotIndex {
        self.upper
    }

    /// Returns the number of slots covered, `upper - lower + 1`.
    #[inline]
    pub const fn width(&self) -> usize {
        self.upper.get() - self.lower.get() + 1
    }

    /// Returns `true` if `index` lies within the range.
    #[inline]
    pub fn contains(&self, index: SlotIndex) -> bool {
        self.lower <= index && index <= self.upper
    }

    /// Returns the physical edge frequencies of the allocated block on the
    /// given grid: the lower edge of the first slot and the upper edge of
    /// the last slot.
    ///
    /// # Panics
    ///
    /// Panics if the range does not fit on the grid.
    pub fn edge_frequencies(&self, grid: &Grid) -> (Frequency, Frequency) {
        (
            grid.frequency_at(self.lower),
            grid.frequency_at(self.upper + 1),
        )
    }
}

impl std::fmt::Display for SpectrumRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.lower.get(), self.upper.get())
    }
}

impl std::fmt::Debug for SpectrumRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpectrumRange")
            .field("lower", &self.lower.get())
            .field("upper", &self.upper.get())
            .finish()
    }
}
