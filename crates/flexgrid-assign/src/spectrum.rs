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

//! Bitset representation of spectrum occupancy.
//!
//! One bit per frequency slot, plus one extra bit for the upper grid edge,
//! so a bitset over a grid of `n` slots has length `n + 1`. A **set** bit
//! means the slot is free; the availability of a whole path is then the
//! bitwise AND of the per-link bitsets, and every client restriction is a
//! further AND. See [`FREE`].

use fixedbitset::FixedBitSet;
use flexgrid_model::{
    client::{ClientInput, FrequencyInterval},
    error::GridError,
    grid::Grid,
};

/// The bit polarity of a free slot.
///
/// Occupancy bitsets are availability masks: a set bit marks a slot that is
/// free for allocation, a cleared bit marks one that is occupied or
/// restricted away.
pub const FREE: bool = true;

/// Creates the availability bitset of an entirely free grid of
/// `total_slots` slots.
///
/// # Examples
///
/// ```rust
/// # use flexgrid_assign::spectrum;
///
/// let available = spectrum::all_free(768);
/// assert_eq!(available.len(), 769);
/// assert_eq!(available.count_ones(..), 769);
/// ```
pub fn all_free(total_slots: usize) -> FixedBitSet {
    let mut bits = FixedBitSet::with_capacity(total_slots + 1);
    bits.set_range(.., FREE);
    bits
}

/// Maps a client frequency interval onto the slots it covers, as an
/// availability mask over the given grid.
///
/// The interval is half-open in frequency, so its end maps to the first
/// slot *not* covered; an unbounded interval covers everything from its
/// start to the upper grid edge. Both endpoints must sit exactly on the
/// grid lattice.
pub fn interval_slots(grid: &Grid, interval: &FrequencyInterval) -> Result<FixedBitSet, GridError> {
    let start = grid.index(interval.start())?.get();
    let end = match interval.end() {
        Some(frequency) => grid.index(frequency)?.get(),
        None => grid.total_slots() + 1,
    };

    let mut bits = FixedBitSet::with_capacity(grid.total_slots() + 1);
    if start < end {
        bits.insert_range(start..end);
    }
    Ok(bits)
}

/// Returns `true` if every slot in `[lower, upper)` is free.
///
/// An empty window is trivially free; a window reaching past the bitset is
/// never free.
#[inline]
pub fn window_is_free(occupancy: &FixedBitSet, lower: usize, upper: usize) -> bool {
    upper <= occupancy.len() && occupancy.count_ones(lower..upper) == upper - lower
}

/// Returns `true` if `needle` is a non-empty sub-mask of `haystack`.
///
/// Empty masks are rejected so that a fully restricted-away candidate set
/// never passes a containment check by vacuity.
#[inline]
pub fn is_subset(needle: &FixedBitSet, haystack: &FixedBitSet) -> bool {
    !needle.is_clear() && needle.is_subset(haystack)
}

/// The client's wish-list restrictions, resolved onto grid slots.
///
/// Intersection intervals are soft: the candidate set is cut down to its
/// overlap with their union, so a partially occupied interval still
/// contributes its free part. Subset intervals are hard: an interval
/// counts only when *every* slot of it is still a candidate, and the
/// surviving intervals become the entire candidate set; if none survives,
/// nothing does. A wish-list with no intervals of a given kind leaves the
/// candidate set untouched.
#[derive(Clone, Debug)]
pub struct Wishlist {
    intersection: Option<FixedBitSet>,
    subset: Vec<FixedBitSet>,
}

impl Wishlist {
    /// Resolves the wish-lists of a client request onto the given grid.
    ///
    /// Intersection intervals are unioned; subset intervals keep their
    /// per-interval masks, since containment is judged one interval at a
    /// time. Fails if any interval endpoint does not map onto the grid.
    pub fn from_client(grid: &Grid, client: &ClientInput) -> Result<Self, GridError> {
        let intersection = if client.intersection_intervals().is_empty() {
            None
        } else {
            let mut union = FixedBitSet::with_capacity(grid.total_slots() + 1);
            for interval in client.intersection_intervals() {
                union.union_with(&interval_slots(grid, interval)?);
            }
            Some(union)
        };

        let mut subset = Vec::with_capacity(client.subset_intervals().len());
        for interval in client.subset_intervals() {
            subset.push(interval_slots(grid, interval)?);
        }

        Ok(Self { intersection, subset })
    }

    /// Applies the wish-list restrictions to an availability mask: the
    /// soft intersection narrowing first, the hard subset containment
    /// check on what remains.
    pub fn apply(&self, available: &FixedBitSet) -> FixedBitSet {
        let mut candidates = available.clone();
        if let Some(preferred) = &self.intersection {
            candidates.intersect_with(preferred);
        }

        if self.subset.is_empty() {
            return candidates;
        }

        let mut granted = FixedBitSet::with_capacity(candidates.len());
        for required in &self.subset {
            if is_subset(required, &candidates) {
                granted.union_with(required);
            }
        }
        granted
    }
}
