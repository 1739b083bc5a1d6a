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

//! Directional allocation strategies.
//!
//! A strategy walks the alignment lattice of valid channel centers and
//! returns the first center whose window of slots is entirely free. Both
//! directions visit exactly the same lattice, so on the same input they
//! can only ever disagree on *which* free window they pick, never on
//! whether one exists.

mod high_to_low;
mod low_to_high;

pub use high_to_low::HighToLow;
pub use low_to_high::LowToHigh;

use fixedbitset::FixedBitSet;
use flexgrid_model::{error::OddWidthError, index::SlotIndex, range::SpectrumRange};

/// The outcome of a strategy search.
///
/// Spectrum exhaustion is an expected outcome, not an error: a fully
/// occupied path yields [`Allocation::NotFound`] and the caller decides
/// whether to try another path.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Allocation {
    /// A free, aligned range was found.
    Found(SpectrumRange),
    /// No aligned window of the requested width is free.
    NotFound,
}

impl Allocation {
    /// Returns the found range, if any.
    #[inline]
    pub fn range(&self) -> Option<SpectrumRange> {
        match self {
            Self::Found(range) => Some(*range),
            Self::NotFound => None,
        }
    }
}

/// Everything a strategy needs to scan one path.
///
/// The occupancy mask is the path availability with all client
/// restrictions already layered in; `base_index` anchors the alignment
/// lattice and `center_granularity_slots` is its spacing.
pub struct AllocationRequest<'a> {
    /// Number of slots on the working grid.
    pub total_slots: usize,
    /// Slot index of the alignment reference frequency.
    pub base_index: SlotIndex,
    /// Availability mask, one bit per slot plus the upper-edge bit.
    pub occupancy: &'a FixedBitSet,
    /// Lattice spacing in slots. Must be non-zero.
    pub center_granularity_slots: usize,
    /// Requested channel width in slots. Must be non-zero.
    pub service_width_slots: usize,
}

/// A directional scan over the alignment lattice.
pub trait AllocationStrategy: Send + Sync {
    /// A short human-readable identifier, also the configuration token
    /// that selects this strategy.
    fn name(&self) -> &'static str;

    /// Scans the lattice and returns the first free window in this
    /// strategy's direction.
    ///
    /// Fails only for odd widths, which cannot straddle a center
    /// symmetrically; exhaustion is reported as
    /// [`Allocation::NotFound`].
    fn search(&self, request: &AllocationRequest<'_>) -> Result<Allocation, OddWidthError>;
}

impl std::fmt::Debug for dyn AllocationStrategy + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AllocationStrategy({})", self.name())
    }
}

/// Resolves a configuration token to a strategy.
///
/// Tokens are matched case-insensitively and ignoring surrounding
/// whitespace. An absent token selects the default high-to-low strategy
/// silently; an unrecognized one does the same but logs a warning, so a
/// typo in the configuration degrades loudly instead of failing the
/// request.
///
/// # Examples
///
/// ```rust
/// # use flexgrid_assign::strategy::resolve_strategy;
///
/// assert_eq!(resolve_strategy(Some("low-to-high")).name(), "low-to-high");
/// assert_eq!(resolve_strategy(Some(" High-To-Low ")).name(), "high-to-low");
/// assert_eq!(resolve_strategy(None).name(), "high-to-low");
/// ```
pub fn resolve_strategy(token: Option<&str>) -> Box<dyn AllocationStrategy> {
    let Some(token) = token else {
        return Box::new(HighToLow);
    };

    match token.trim().to_ascii_lowercase().as_str() {
        "high-to-low" => Box::new(HighToLow),
        "low-to-high" => Box::new(LowToHigh),
        other => {
            tracing::warn!(
                token = other,
                "unknown allocation strategy token, falling back to high-to-low"
            );
            Box::new(HighToLow)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spectrum;

    fn request<'a>(
        total_slots: usize,
        occupancy: &'a FixedBitSet,
        center_granularity_slots: usize,
        service_width_slots: usize,
    ) -> AllocationRequest<'a> {
        AllocationRequest {
            total_slots,
            base_index: SlotIndex::new(0),
            occupancy,
            center_granularity_slots,
            service_width_slots,
        }
    }

    #[test]
    fn test_resolve_strategy_tokens() {
        assert_eq!(resolve_strategy(Some("high-to-low")).name(), "high-to-low");
        assert_eq!(resolve_strategy(Some("LOW-TO-HIGH")).name(), "low-to-high");
        assert_eq!(resolve_strategy(Some("  low-to-high\n")).name(), "low-to-high");
        assert_eq!(resolve_strategy(None).name(), "high-to-low");
        assert_eq!(resolve_strategy(Some("widest-first")).name(), "high-to-low");
    }

    #[test]
    fn test_dyn_debug_uses_name() {
        let strategy = resolve_strategy(Some("low-to-high"));
        assert_eq!(format!("{:?}", &*strategy), "AllocationStrategy(low-to-high)");
    }

    #[test]
    fn test_both_directions_agree_on_existence() {
        // Free windows only around slots 16..24 on a 64-slot grid.
        let mut occupancy = spectrum::all_free(64);
        occupancy.remove_range(0..16);
        occupancy.remove_range(24..64);

        let req = request(64, &occupancy, 4, 8);
        let down = HighToLow.search(&req).unwrap();
        let up = LowToHigh.search(&req).unwrap();
        assert_eq!(down, Allocation::Found(up.range().unwrap()));

        // Shrink the free window below the requested width.
        occupancy.remove_range(16..18);
        let req = request(64, &occupancy, 4, 8);
        assert_eq!(HighToLow.search(&req).unwrap(), Allocation::NotFound);
        assert_eq!(LowToHigh.search(&req).unwrap(), Allocation::NotFound);
    }

    #[test]
    fn test_allocation_range_accessor() {
        assert_eq!(Allocation::NotFound.range(), None);
        let range = SpectrumRange::new(SlotIndex::new(4), SlotIndex::new(11));
        assert_eq!(Allocation::Found(range).range(), Some(range));
    }
}
