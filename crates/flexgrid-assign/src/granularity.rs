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

//! Reduction of per-node granularities to one working lattice spacing.
//!
//! Every node along a candidate path constrains the channel center to
//! multiples of its own center-frequency granularity. A center valid for
//! all of them must sit on multiples of the least common multiple of the
//! collected granularities, so the allocator scans that coarser lattice.

use flexgrid_core::math::decimal::Decimal;
use rustc_hash::FxHashSet;

/// The fallback granularity of a collection built with
/// [`GranularityCollection::new`], in GHz.
#[inline]
pub fn default_fallback_ghz() -> Decimal {
    Decimal::from_int(50)
}

/// The set of distinct center-frequency granularities collected along a
/// path.
///
/// # Examples
///
/// ```rust
/// # use flexgrid_assign::granularity::GranularityCollection;
/// # use flexgrid_core::math::decimal::Decimal;
///
/// let mut collection = GranularityCollection::new();
/// collection.add(Some(Decimal::new(125, 1)));
/// collection.add(Some(Decimal::from_int(50)));
/// assert_eq!(collection.least_common_multiple_ghz(), Decimal::from_int(50));
/// // On a 6.25 GHz working grid the lattice is 8 slots wide.
/// assert_eq!(collection.slots(Decimal::new(625, 2)), 8);
/// ```
#[derive(Clone, Debug)]
pub struct GranularityCollection {
    granularities_ghz: FxHashSet<Decimal>,
    fallback_ghz: Decimal,
}

impl GranularityCollection {
    /// Creates an empty collection with the 50 GHz default fallback.
    #[inline]
    pub fn new() -> Self {
        Self::with_fallback(default_fallback_ghz())
    }

    /// Creates an empty collection that reduces to `fallback_ghz` when no
    /// node reported a granularity.
    ///
    /// # Panics
    ///
    /// Panics if `fallback_ghz` is not strictly positive.
    #[inline]
    pub fn with_fallback(fallback_ghz: Decimal) -> Self {
        assert!(
            fallback_ghz.is_positive(),
            "called `GranularityCollection::with_fallback` with a non-positive fallback: {} GHz",
            fallback_ghz
        );

        Self {
            granularities_ghz: FxHashSet::default(),
            fallback_ghz,
        }
    }

    /// Records one node's reported granularity.
    ///
    /// Returns `true` if the value was recorded. Absent reports,
    /// non-positive values, and values already present are ignored and
    /// return `false`.
    pub fn add(&mut self, granularity_ghz: Option<Decimal>) -> bool {
        match granularity_ghz {
            Some(value) if value.is_positive() => self.granularities_ghz.insert(value),
            _ => false,
        }
    }

    /// Returns the number of distinct granularities collected.
    #[inline]
    pub fn len(&self) -> usize {
        self.granularities_ghz.len()
    }

    /// Returns `true` if nothing was collected.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.granularities_ghz.is_empty()
    }

    /// Reduces the collection to the spacing of the common alignment
    /// lattice, in GHz.
    ///
    /// An empty collection reduces to its constructor-provided fallback.
    pub fn least_common_multiple_ghz(&self) -> Decimal {
        self.granularities_ghz
            .iter()
            .copied()
            .reduce(|a, b| a.lcm(b))
            .unwrap_or(self.fallback_ghz)
    }

    /// Returns the lattice spacing in slots of the working grid with
    /// granularity `reference_ghz`.
    ///
    /// The reduced spacing is first coarsened to a multiple of the working
    /// granularity, so the result is always an exact slot count.
    ///
    /// # Panics
    ///
    /// Panics if `reference_ghz` is not strictly positive.
    pub fn slots(&self, reference_ghz: Decimal) -> usize {
        let common = self.least_common_multiple_ghz().lcm(reference_ghz);
        let slots = common
            .div_exact(reference_ghz)
            .expect("lcm with the reference is a multiple of the reference");
        slots as usize
    }
}

impl Default for GranularityCollection {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
