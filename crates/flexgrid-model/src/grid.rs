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

//! The DWDM frequency grid and its slot-index mapping.
//!
//! A grid discretizes a physical frequency band into fixed-width slots: an
//! edge frequency (THz), a slot granularity (GHz), and a slot count. This
//! module maps physical frequencies onto integer slot indices and back,
//! rejecting frequencies that are off-grid or off-lattice, and provides the
//! aligned-center arithmetic the directional allocation strategies scan
//! over: the first and last slot indices that are valid channel centers for
//! a given service width under a node's center-frequency granularity.

use crate::{
    error::{GridError, NoAlignedIndexError, OddWidthError},
    frequency::Frequency,
    index::SlotIndex,
};
use flexgrid_core::math::decimal::Decimal;

/// The architecture-wide alignment reference, 193.1 THz.
///
/// Center-frequency granularity constraints are expressed relative to this
/// anchor: the slot index of the anchor on the working grid is the base of
/// the alignment lattice that every candidate channel center must sit on.
#[inline]
pub fn anchor_frequency() -> Frequency {
    Frequency::thz(Decimal::new(1931, 1))
}

/// An immutable flexgrid: edge frequency, slot granularity, slot count.
///
/// Slot indices range over `[0, total_slots]` inclusive at both ends; the
/// value `total_slots` denotes the upper grid edge itself.
///
/// # Examples
///
/// ```rust
/// # use flexgrid_model::grid::Grid;
/// # use flexgrid_model::frequency::Frequency;
/// # use flexgrid_core::math::decimal::Decimal;
///
/// let grid = Grid::c_band();
/// let edge = Frequency::thz(Decimal::new(191_325, 3));
/// assert_eq!(grid.index(edge).unwrap().get(), 0);
/// assert_eq!(grid.frequency_at(grid.index(edge).unwrap()), edge);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Grid {
    edge: Frequency,
    granularity_ghz: Decimal,
    total_slots: usize,
}

impl Grid {
    /// Creates a new grid.
    ///
    /// # Panics
    ///
    /// Panics if `granularity_ghz` is not strictly positive.
    #[inline]
    pub fn new(edge: Frequency, granularity_ghz: Decimal, total_slots: usize) -> Self {
        assert!(
            granularity_ghz.is_positive(),
            "called `Grid::new` with a non-positive granularity: {} GHz",
            granularity_ghz
        );

        Self {
            edge,
            granularity_ghz,
            total_slots,
        }
    }

    /// The production C-band flexgrid: edge 191.325 THz, 6.25 GHz
    /// granularity, 768 slots.
    #[inline]
    pub fn c_band() -> Self {
        Self::new(
            Frequency::thz(Decimal::new(191_325, 3)),
            Decimal::new(625, 2),
            768,
        )
    }

    /// Returns the lower edge frequency of the grid.
    #[inline]
    pub const fn edge(&self) -> Frequency {
        self.edge
    }

    /// Returns the slot granularity in GHz.
    #[inline]
    pub const fn granularity_ghz(&self) -> Decimal {
        self.granularity_ghz
    }

    /// Returns the number of slots on the grid.
    #[inline]
    pub const fn total_slots(&self) -> usize {
        self.total_slots
    }

    /// Returns the width of one slot in THz.
    #[inline]
    pub fn slot_step_thz(&self) -> Decimal {
        self.granularity_ghz.div_pow10(3)
    }

    /// Returns the upper edge frequency of the grid.
    #[inline]
    pub fn upper_edge(&self) -> Frequency {
        self.edge
            .advanced_by(self.slot_step_thz().scale_by(self.total_slots as i128))
    }

    /// Maps a physical frequency onto its slot index.
    ///
    /// The lower edge maps to `0` and the upper edge to `total_slots`.
    /// A frequency outside `[edge, upper_edge]` fails with
    /// [`GridError::OutOfRange`]; a frequency inside the band that does not
    /// sit exactly on the granularity lattice fails with
    /// [`GridError::Misaligned`]. There is no silent rounding.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use flexgrid_model::grid::Grid;
    /// # use flexgrid_model::frequency::Frequency;
    /// # use flexgrid_core::math::decimal::Decimal;
    ///
    /// let grid = Grid::c_band();
    /// let f = Frequency::thz(Decimal::new(191_375, 3));
    /// assert_eq!(grid.index(f).unwrap().get(), 8);
    /// assert!(grid.index(Frequency::thz(Decimal::new(191_324, 3))).is_err());
    /// ```
    pub fn index(&self, frequency: Frequency) -> Result<SlotIndex, GridError> {
        let offset = frequency.offset_from(self.edge);
        let step = self.slot_step_thz();
        let span = step.scale_by(self.total_slots as i128);

        if offset.is_negative() || offset > span {
            return Err(GridError::OutOfRange {
                frequency,
                lower_edge: self.edge,
                upper_edge: self.upper_edge(),
            });
        }

        match offset.div_exact(step) {
            Some(slots) => Ok(SlotIndex::new(slots as usize)),
            None => Err(GridError::Misaligned {
                frequency,
                granularity_ghz: self.granularity_ghz,
            }),
        }
    }

    /// Returns the physical frequency at a slot index. Exact inverse of
    /// [`Grid::index`] for every index the grid can produce.
    ///
    /// # Panics
    ///
    /// Panics if `index` exceeds `total_slots`.
    pub fn frequency_at(&self, index: SlotIndex) -> Frequency {
        assert!(
            index.get() <= self.total_slots,
            "called `Grid::frequency_at` with slot index out of bounds: the total is {} but the index is {}",
            self.total_slots,
            index.get()
        );

        self.edge
            .advanced_by(self.slot_step_thz().scale_by(index.get() as i128))
    }

    /// Derives the node-independent alignment base: the slot index of the
    /// given reference frequency (normally [`anchor_frequency`]) on this
    /// grid.
    ///
    /// Fails with [`NoAlignedIndexError`] when the reference does not map
    /// onto the grid, in which case no alignment lattice can be anchored and
    /// the whole request must be rejected upstream.
    #[inline]
    pub fn reference_index(&self, reference: Frequency) -> Result<SlotIndex, NoAlignedIndexError> {
        self.index(reference).map_err(|cause| NoAlignedIndexError {
            frequency: reference,
            cause,
        })
    }
}

/// Computes the lowest slot index that is a valid channel center for a
/// service of `service_width_slots` slots, on the lattice spaced
/// `center_granularity_slots` apart and anchored at `base_index`.
///
/// The result is the smallest index congruent to
/// `base_index mod center_granularity_slots` that is at least half the
/// service width, so the channel's lower edge cannot fall below slot 0.
///
/// # Panics
///
/// Panics if `center_granularity_slots` is zero.
///
/// # Examples
///
/// ```rust
/// # use flexgrid_model::grid::first_aligned_center;
/// # use flexgrid_model::index::SlotIndex;
///
/// // 193.1 THz sits at slot 284 on the C-band grid; 284 mod 8 == 4.
/// let center = first_aligned_center(8, SlotIndex::new(284), 8).unwrap();
/// assert_eq!(center.get(), 4);
/// assert!(first_aligned_center(8, SlotIndex::new(284), 7).is_err());
/// ```
pub fn first_aligned_center(
    center_granularity_slots: usize,
    base_index: SlotIndex,
    service_width_slots: usize,
) -> Result<SlotIndex, OddWidthError> {
    assert!(
        center_granularity_slots > 0,
        "called `first_aligned_center` with a zero center-frequency granularity"
    );

    if service_width_slots % 2 != 0 {
        return Err(OddWidthError {
            width: service_width_slots,
        });
    }

    let half_width = service_width_slots / 2;
    let mut candidate = base_index.get() % center_granularity_slots;
    while candidate < half_width {
        candidate += center_granularity_slots;
    }

    Ok(SlotIndex::new(candidate))
}

/// Symmetric counterpart of [`first_aligned_center`], bounded above by the
/// grid: the highest lattice index whose channel window still lies fully
/// inside `[0, total_slots)`.
///
/// Used as the starting point of the high-to-low scan. The result may still
/// be below half the service width when the grid is too small to host the
/// channel at all; the scan then terminates immediately with no match.
///
/// # Panics
///
/// Panics if `center_granularity_slots` is zero.
///
/// # Examples
///
/// ```rust
/// # use flexgrid_model::grid::last_aligned_center;
/// # use flexgrid_model::index::SlotIndex;
///
/// // Lattice 0, 8, 16, 24 on a 32-slot grid; the last center whose
/// // 8-slot window fits below 32 is 24.
/// let center = last_aligned_center(8, SlotIndex::new(0), 8, 32).unwrap();
/// assert_eq!(center.get(), 24);
/// ```
pub fn last_aligned_center(
    center_granularity_slots: usize,
    base_index: SlotIndex,
    service_width_slots: usize,
    total_slots: usize,
) -> Result<SlotIndex, OddWidthError> {
    assert!(
        center_granularity_slots > 0,
        "called `last_aligned_center` with a zero center-frequency granularity"
    );

    if service_width_slots % 2 != 0 {
        return Err(OddWidthError {
            width: service_width_slots,
        });
    }

    let half_width = service_width_slots / 2;
    let limit = total_slots.saturating_sub(half_width);
    let mut candidate = base_index.get() % center_granularity_slots;
    while candidate + center_granularity_slots <= limit {
        candidate += center_granularity_slots;
    }

    Ok(SlotIndex::new(candidate))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn freq(mantissa: i128, exponent: u32) -> Frequency {
        Frequency::thz(Decimal::new(mantissa, exponent))
    }

    #[test]
    fn test_c_band_edges() {
        let grid = Grid::c_band();
        assert_eq!(grid.edge(), freq(191_325, 3));
        assert_eq!(grid.upper_edge(), freq(196_125, 3));
        assert_eq!(grid.total_slots(), 768);
        assert_eq!(grid.slot_step_thz(), Decimal::new(625, 5));
    }

    #[test]
    fn test_index_on_grid() {
        let grid = Grid::c_band();
        assert_eq!(grid.index(freq(191_325, 3)).unwrap().get(), 0);
        assert_eq!(grid.index(freq(191_375, 3)).unwrap().get(), 8);
        assert_eq!(grid.index(freq(196_125, 3)).unwrap().get(), 768);
        // The 193.1 THz anchor sits at slot 284.
        assert_eq!(grid.index(anchor_frequency()).unwrap().get(), 284);
    }

    #[test]
    fn test_index_out_of_range() {
        let grid = Grid::c_band();
        assert!(matches!(
            grid.index(freq(191_324, 3)),
            Err(GridError::OutOfRange { .. })
        ));
        assert!(matches!(
            grid.index(freq(196_126, 3)),
            Err(GridError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_index_misaligned() {
        let grid = Grid::c_band();
        // 191.326 THz is inside the band but 1 GHz off the 6.25 GHz lattice.
        assert!(matches!(
            grid.index(freq(191_326, 3)),
            Err(GridError::Misaligned { .. })
        ));
    }

    #[test]
    fn test_index_frequency_round_trip() {
        let grid = Grid::c_band();
        for slot in [0usize, 1, 8, 284, 767, 768] {
            let frequency = grid.frequency_at(SlotIndex::new(slot));
            assert_eq!(grid.index(frequency).unwrap().get(), slot);
        }
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_frequency_at_out_of_bounds() {
        let grid = Grid::c_band();
        let _ = grid.frequency_at(SlotIndex::new(769));
    }

    #[test]
    fn test_reference_index() {
        let grid = Grid::c_band();
        assert_eq!(grid.reference_index(anchor_frequency()).unwrap().get(), 284);

        // On a 50 GHz fixed grid anchored off 193.1 the reference still maps;
        // shift the edge by 1 GHz so it no longer does.
        let shifted = Grid::new(freq(191_326, 3), Decimal::new(625, 2), 768);
        let err = shifted.reference_index(anchor_frequency()).unwrap_err();
        assert_eq!(err.frequency, anchor_frequency());
        assert!(matches!(err.cause, GridError::Misaligned { .. }));
    }

    #[test]
    #[should_panic(expected = "non-positive granularity")]
    fn test_new_rejects_zero_granularity() {
        let _ = Grid::new(freq(191_325, 3), Decimal::ZERO, 768);
    }

    #[test]
    fn test_first_aligned_center_congruence() {
        let base = SlotIndex::new(284);
        let center = first_aligned_center(8, base, 8).unwrap();
        assert!(center.get() >= 4);
        assert_eq!(center.get() % 8, 284 % 8);

        // A wider service pushes the first valid center upward.
        let wide = first_aligned_center(8, base, 32).unwrap();
        assert!(wide.get() >= 16);
        assert_eq!(wide.get() % 8, 284 % 8);
    }

    #[test]
    fn test_first_aligned_center_rejects_odd_width() {
        let err = first_aligned_center(8, SlotIndex::new(0), 7).unwrap_err();
        assert_eq!(err.width, 7);
    }

    #[test]
    fn test_last_aligned_center_bounds() {
        // Lattice offset 4 (base 284): 4, 12, 20, 28, ...
        let base = SlotIndex::new(284);
        let last = last_aligned_center(8, base, 8, 768).unwrap();
        assert_eq!(last.get() % 8, 4);
        assert!(last.get() + 4 <= 768);
        assert!(last.get() + 8 + 4 > 768);

        // Tiny grid: the only lattice point is below the half width and the
        // caller's scan must find nothing.
        let cramped = last_aligned_center(8, SlotIndex::new(0), 8, 2).unwrap();
        assert_eq!(cramped.get(), 0);
    }

    #[test]
    fn test_aligned_centers_bracket_consistently() {
        for width in [2usize, 4, 8, 16] {
            let base = SlotIndex::new(284);
            let first = first_aligned_center(8, base, width).unwrap();
            let last = last_aligned_center(8, base, width, 768).unwrap();
            assert!(first <= last);
            assert_eq!(first.get() % 8, last.get() % 8);
            // Every lattice point between them is a valid center.
            let mut center = first.get();
            while center <= last.get() {
                assert!(center >= width / 2);
                assert!(center + width / 2 <= 768);
                center += 8;
            }
        }
    }
}
