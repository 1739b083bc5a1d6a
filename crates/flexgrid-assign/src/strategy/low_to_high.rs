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
    grid::first_aligned_center,
    index::SlotIndex,
    range::SpectrumRange,
};

/// Scans the alignment lattice from the bottom of the band upward.
///
/// The mirror image of the default strategy: it visits the same lattice
/// points in the opposite order, packing services against the lower band
/// edge instead.
#[derive(Clone, Copy, Default, Debug)]
pub struct LowToHigh;

impl AllocationStrategy for LowToHigh {
    fn name(&self) -> &'static str {
        "low-to-high"
    }

    fn search(&self, request: &AllocationRequest<'_>) -> Result<Allocation, OddWidthError> {
        assert!(
            request.service_width_slots > 0,
            "called `LowToHigh::search` with an empty service width"
        );

        let spacing = request.center_granularity_slots;
        let half_width = request.service_width_slots / 2;
        let mut center = first_aligned_center(
            spacing,
            request.base_index,
            request.service_width_slots,
        )?
        .get();

        while center + half_width <= request.total_slots {
            let lower = center - half_width;
            let upper = center + half_width;
            if spectrum::window_is_free(request.occupancy, lower, upper) {
                return Ok(Allocation::Found(SpectrumRange::new(
                    SlotIndex::new(lower),
                    SlotIndex::new(upper - 1),
                )));
            }
            center += spacing;
        }

        Ok(Allocation::NotFound)
    }
}
