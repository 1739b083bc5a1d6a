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

use crate::{
    spectrum,
    strategy::{Allocation, AllocationRequest, AllocationStrategy},
};
use flexgrid_model::{
    error::OddWidthError,
    grid::last_aligned_center,
    index::SlotIndex,
    range::SpectrumRange,
};

/// Scans the alignment lattice from the top of the band downward.
///
/// This is the default strategy. Packing services against the upper band
/// edge keeps the lower end of the band, where fixed-grid services
/// typically live, contiguous for longer.
///
/// # Examples
///
/// ```rust
/// # use flexgrid_assign::spectrum;
/// # use flexgrid_assign::strategy::{
/// #     Allocation, AllocationRequest, AllocationStrategy, HighToLow,
/// # };
/// # use flexgrid_model::index::SlotIndex;
///
/// let occupancy = spectrum::all_free(32);
/// let request = AllocationRequest {
///     total_slots: 32,
///     base_index: SlotIndex::new(0),
///     occupancy: &occupancy,
///     center_granularity_slots: 8,
///     service_width_slots: 8,
/// };
/// let allocation = HighToLow.search(&request).unwrap();
/// let range = allocation.range().unwrap();
/// assert_eq!((range.lower().get(), range.upper().get()), (20, 27));
/// ```
#[derive(Clone, Copy, Default, Debug)]
pub struct HighToLow;

impl AllocationStrategy for HighToLow {
    fn name(&self) -> &'static str {
        "high-to-low"
    }

    fn search(&self, request: &AllocationRequest<'_>) -> Result<Allocation, OddWidthError> {
        assert!(
            request.service_width_slots > 0,
            "called `HighToLow::search` with an empty service width"
        );

        let spacing = request.center_granularity_slots;
        let half_width = request.service_width_slots / 2;
        let mut center = last_aligned_center(
            spacing,
            request.base_index,
            request.service_width_slots,
            request.total_slots,
        )?
        .get();

        loop {
            if center < half_width {
                return Ok(Allocation::NotFound);
            }

            let lower = center - half_width;
            let upper = center + half_width;
            if upper <= request.total_slots && spectrum::window_is_free(request.occupancy, lower, upper) {
                return Ok(Allocation::Found(SpectrumRange::new(
                    SlotIndex::new(lower),
                    SlotIndex::new(upper - 1),
                )));
            }

            // The lattice point below would wrap past zero.
            if center < spacing {
                return Ok(Allocation::NotFound);
            }
            center -= spacing;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixedbitset::FixedBitSet;

    fn request<'a>(
        total_slots: usize,
        base: usize,
        occupancy: &'a FixedBitSet,
        center_granularity_slots: usize,
        service_width_slots: usize,
    ) -> AllocationRequest<'a> {
        AllocationRequest {
            total_slots,
            base_index: SlotIndex::new(base),
            occupancy,
            center_granularity_slots,
            service_width_slots,
        }
    }

    fn found(lower: usize, upper: usize) -> Allocation {
        Allocation::Found(SpectrumRange::new(
            SlotIndex::new(lower),
            SlotIndex::new(upper),
        ))
    }

    #[test]
    fn test_picks_the_topmost_window() {
        let occupancy = spectrum::all_free(32);
        let req = request(32, 0, &occupancy, 8, 8);
        // Lattice 0, 8, 16, 24; the topmost fitting center is 24.
        assert_eq!(HighToLow.search(&req).unwrap(), found(20, 27));
    }

    #[test]
    fn test_skips_occupied_windows() {
        let mut occupancy = spectrum::all_free(32);
        // Occupy slot 25, spoiling the window around center 24.
        occupancy.remove(25);
        let req = request(32, 0, &occupancy, 8, 8);
        assert_eq!(HighToLow.search(&req).unwrap(), found(12, 19));
    }

    #[test]
    fn test_not_found_when_fully_occupied() {
        let occupancy = FixedBitSet::with_capacity(33);
        let req = request(32, 0, &occupancy, 8, 8);
        assert_eq!(HighToLow.search(&req).unwrap(), Allocation::NotFound);
    }

    #[test]
    fn test_not_found_on_a_cramped_grid() {
        // The only lattice point is 0, below the half width.
        let occupancy = spectrum::all_free(4);
        let req = request(4, 0, &occupancy, 8, 8);
        assert_eq!(HighToLow.search(&req).unwrap(), Allocation::NotFound);
    }

    #[test]
    fn test_offset_lattice() {
        let occupancy = spectrum::all_free(768);
        // Base 284, spacing 8: lattice 4, 12, ..., 764; the topmost center
        // whose window fits is 764.
        let req = request(768, 284, &occupancy, 8, 8);
        assert_eq!(HighToLow.search(&req).unwrap(), found(760, 767));
    }

    #[test]
    fn test_rejects_odd_width() {
        let occupancy = spectrum::all_free(32);
        let req = request(32, 0, &occupancy, 8, 7);
        assert_eq!(HighToLow.search(&req).unwrap_err(), OddWidthError { width: 7 });
    }

    #[test]
    fn test_deterministic() {
        let mut occupancy = spectrum::all_free(64);
        occupancy.remove_range(40..48);
        let req = request(64, 0, &occupancy, 4, 8);
        let first = HighToLow.search(&req).unwrap();
        for _ in 0..8 {
            assert_eq!(HighToLow.search(&req).unwrap(), first);
        }
    }
}
