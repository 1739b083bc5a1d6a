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

//! The spectrum assignment entry point.

use crate::{
    granularity::GranularityCollection,
    selector::RangeSelector,
    spectrum::Wishlist,
    strategy::{self, Allocation, AllocationRequest, AllocationStrategy},
};
use fixedbitset::FixedBitSet;
use flexgrid_model::{
    capability::Capability,
    client::ClientInput,
    error::{ClientInputError, GridError, NoAlignedIndexError, OddWidthError},
    grid::{self, Grid},
};

/// The error type for a whole assignment attempt.
///
/// Aggregates the validation failures of the individual stages. Spectrum
/// exhaustion is not among them; see [`Allocation::NotFound`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentError {
    /// A frequency did not map onto the working grid.
    Grid(GridError),
    /// The client's width hints could not be resolved.
    Client(ClientInputError),
    /// The resolved width cannot straddle a channel center.
    OddWidth(OddWidthError),
    /// The alignment reference does not map onto the working grid.
    NoAlignedIndex(NoAlignedIndexError),
}

impl std::fmt::Display for AssignmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Grid(err) => write!(f, "spectrum assignment failed: {}", err),
            Self::Client(err) => write!(f, "spectrum assignment failed: {}", err),
            Self::OddWidth(err) => write!(f, "spectrum assignment failed: {}", err),
            Self::NoAlignedIndex(err) => write!(f, "spectrum assignment failed: {}", err),
        }
    }
}

impl std::error::Error for AssignmentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(err) => Some(err),
            Self::Client(err) => Some(err),
            Self::OddWidth(err) => Some(err),
            Self::NoAlignedIndex(err) => Some(err),
        }
    }
}

impl From<GridError> for AssignmentError {
    fn from(err: GridError) -> Self {
        Self::Grid(err)
    }
}

impl From<ClientInputError> for AssignmentError {
    fn from(err: ClientInputError) -> Self {
        Self::Client(err)
    }
}

impl From<OddWidthError> for AssignmentError {
    fn from(err: OddWidthError) -> Self {
        Self::OddWidth(err)
    }
}

impl From<NoAlignedIndexError> for AssignmentError {
    fn from(err: NoAlignedIndexError) -> Self {
        Self::NoAlignedIndex(err)
    }
}

/// Assigns spectrum on one grid with one strategy.
///
/// Construction is cheap; the assigner holds no per-request state, so one
/// instance serves any number of requests.
///
/// # Examples
///
/// ```rust
/// # use flexgrid_assign::assigner::SpectrumAssigner;
/// # use flexgrid_assign::spectrum;
/// # use flexgrid_model::capability::Capability;
/// # use flexgrid_model::client::ClientInput;
/// # use flexgrid_model::grid::Grid;
///
/// let assigner = SpectrumAssigner::from_config(Grid::c_band(), None);
/// let available = spectrum::all_free(768);
/// let client = ClientInput::new().with_a_end_slot_width(4);
///
/// let allocation = assigner
///     .assign(&[Capability::default()], &client, None, &available)
///     .unwrap();
/// let range = allocation.range().unwrap();
/// assert_eq!(range.width(), 8);
/// ```
#[derive(Debug)]
pub struct SpectrumAssigner {
    grid: Grid,
    strategy: Box<dyn AllocationStrategy>,
}

impl SpectrumAssigner {
    /// Creates an assigner with an explicit strategy.
    #[inline]
    pub fn new(grid: Grid, strategy: Box<dyn AllocationStrategy>) -> Self {
        Self { grid, strategy }
    }

    /// Creates an assigner from a configuration token, falling back to the
    /// default strategy as [`strategy::resolve_strategy`] does.
    #[inline]
    pub fn from_config(grid: Grid, strategy_token: Option<&str>) -> Self {
        Self::new(grid, strategy::resolve_strategy(strategy_token))
    }

    /// Returns the working grid.
    #[inline]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the name of the configured strategy.
    #[inline]
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Runs one assignment: reduces the node capabilities to a working
    /// lattice, resolves the client's width, layers the restrictions onto
    /// the path availability, and scans for a free window.
    ///
    /// `capabilities` are the capabilities of the nodes the path traverses;
    /// `customer_range` optionally pins the service into a reserved
    /// sub-mask of the grid; `available` is the AND of the per-link
    /// availability masks.
    pub fn assign(
        &self,
        capabilities: &[Capability],
        client: &ClientInput,
        customer_range: Option<&FixedBitSet>,
        available: &FixedBitSet,
    ) -> Result<Allocation, AssignmentError> {
        let mut collection = GranularityCollection::new();
        for capability in capabilities {
            collection.add(Some(capability.center_frequency_granularity_ghz()));
        }
        let center_granularity_slots = collection.slots(self.grid.granularity_ghz());

        let service_width_slots = client.service_width_slots(self.grid.granularity_ghz())?;
        let base_index = self.grid.reference_index(grid::anchor_frequency())?;

        let wishlist = Wishlist::from_client(&self.grid, client)?;
        let candidates = RangeSelector.select(available, customer_range, &wishlist);

        let request = AllocationRequest {
            total_slots: self.grid.total_slots(),
            base_index,
            occupancy: &candidates,
            center_granularity_slots,
            service_width_slots,
        };
        Ok(self.strategy.search(&request)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spectrum;
    use flexgrid_core::math::decimal::Decimal;
    use flexgrid_model::{client::FrequencyInterval, frequency::Frequency};

    fn freq(mantissa: i128, exponent: u32) -> Frequency {
        Frequency::thz(Decimal::new(mantissa, exponent))
    }

    fn range_of(allocation: Allocation) -> (usize, usize) {
        let range = allocation.range().expect("expected a found allocation");
        (range.lower().get(), range.upper().get())
    }

    #[test]
    fn test_assign_on_a_free_c_band() {
        let assigner = SpectrumAssigner::from_config(Grid::c_band(), Some("low-to-high"));
        let client = ClientInput::new().with_a_end_slot_width(4);
        let allocation = assigner
            .assign(&[Capability::default()], &client, None, &spectrum::all_free(768))
            .unwrap();
        // 50 GHz lattice anchored at slot 284 has offset 4; the lowest
        // lattice point at or above the half width 4 is 4 itself.
        assert_eq!(range_of(allocation), (0, 7));
    }

    #[test]
    fn test_assign_default_strategy_packs_high() {
        let assigner = SpectrumAssigner::from_config(Grid::c_band(), None);
        assert_eq!(assigner.strategy_name(), "high-to-low");
        let client = ClientInput::new().with_a_end_slot_width(4);
        let allocation = assigner
            .assign(&[Capability::default()], &client, None, &spectrum::all_free(768))
            .unwrap();
        // Topmost 50 GHz lattice point on the 284-anchored lattice is 764.
        assert_eq!(range_of(allocation), (760, 767));
    }

    #[test]
    fn test_assign_honors_customer_range() {
        let assigner = SpectrumAssigner::from_config(Grid::c_band(), None);
        let client = ClientInput::new().with_a_end_slot_width(4);

        let mut reserved = FixedBitSet::with_capacity(769);
        reserved.insert_range(0..64);
        let allocation = assigner
            .assign(
                &[Capability::default()],
                &client,
                Some(&reserved),
                &spectrum::all_free(768),
            )
            .unwrap();
        let (lower, upper) = range_of(allocation);
        assert!(upper < 64);
        assert_eq!(upper - lower + 1, 8);
    }

    #[test]
    fn test_assign_honors_subset_wishlist() {
        let assigner = SpectrumAssigner::from_config(Grid::c_band(), None);
        // Hard-restrict to [191.35, 191.45) THz, slots 4..20.
        let client = ClientInput::new()
            .with_a_end_slot_width(4)
            .with_subset_interval(FrequencyInterval::new(freq(191_350, 3), freq(191_450, 3)));
        let allocation = assigner
            .assign(&[Capability::default()], &client, None, &spectrum::all_free(768))
            .unwrap();
        // The only 50 GHz-aligned window inside slots 4..20 is [8, 15].
        assert_eq!(range_of(allocation), (8, 15));
    }

    #[test]
    fn test_assign_reports_exhaustion_as_not_found() {
        let assigner = SpectrumAssigner::from_config(Grid::c_band(), None);
        let client = ClientInput::new().with_a_end_slot_width(4);
        let occupied = FixedBitSet::with_capacity(769);
        let allocation = assigner
            .assign(&[Capability::default()], &client, None, &occupied)
            .unwrap();
        assert_eq!(allocation, Allocation::NotFound);
    }

    #[test]
    fn test_assign_propagates_client_errors() {
        let assigner = SpectrumAssigner::from_config(Grid::c_band(), None);
        let client = ClientInput::new()
            .with_a_end_slot_width(4)
            .with_z_end_slot_width(8);
        let err = assigner
            .assign(&[Capability::default()], &client, None, &spectrum::all_free(768))
            .unwrap_err();
        assert_eq!(
            err,
            AssignmentError::Client(ClientInputError::ConflictingConstraints { a_end: 4, z_end: 8 })
        );
    }

    #[test]
    fn test_assign_propagates_wishlist_grid_errors() {
        let assigner = SpectrumAssigner::from_config(Grid::c_band(), None);
        let client = ClientInput::new()
            .with_a_end_slot_width(4)
            .with_subset_interval(FrequencyInterval::new(freq(191_326, 3), freq(191_450, 3)));
        let err = assigner
            .assign(&[Capability::default()], &client, None, &spectrum::all_free(768))
            .unwrap_err();
        assert!(matches!(err, AssignmentError::Grid(GridError::Misaligned { .. })));
    }

    #[test]
    fn test_assign_rejects_unanchored_grids() {
        // A grid the 193.1 THz reference does not map onto.
        let shifted = Grid::new(freq(191_326, 3), Decimal::new(625, 2), 768);
        let assigner = SpectrumAssigner::from_config(shifted, None);
        let client = ClientInput::new().with_a_end_slot_width(4);
        let err = assigner
            .assign(&[Capability::default()], &client, None, &spectrum::all_free(768))
            .unwrap_err();
        assert!(matches!(err, AssignmentError::NoAlignedIndex(_)));
    }

    #[test]
    fn test_assign_coarsens_over_mixed_capabilities() {
        let assigner = SpectrumAssigner::from_config(Grid::c_band(), Some("low-to-high"));
        let client = ClientInput::new().with_a_end_slot_width(4);
        let capabilities = [
            Capability::from_reported(None, Some(Decimal::from_int(100)), None, None),
            Capability::default(),
        ];
        let allocation = assigner
            .assign(&capabilities, &client, None, &spectrum::all_free(768))
            .unwrap();
        // lcm(100, 50) = 100 GHz = 16 slots; lattice offset 284 % 16 = 12.
        let (lower, _) = range_of(allocation);
        let center = lower + 4;
        assert_eq!(center % 16, 284 % 16);
    }

    #[test]
    fn test_error_display_and_source() {
        let err = AssignmentError::from(OddWidthError { width: 3 });
        assert!(format!("{}", err).starts_with("spectrum assignment failed:"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_allocation_width_matches_request() {
        let assigner = SpectrumAssigner::from_config(Grid::c_band(), None);
        for (hint, slots) in [(4u32, 8usize), (8, 16), (16, 32)] {
            let client = ClientInput::new().with_a_end_slot_width(hint);
            let allocation = assigner
                .assign(&[Capability::default()], &client, None, &spectrum::all_free(768))
                .unwrap();
            assert_eq!(allocation.range().unwrap().width(), slots);
        }
    }

    #[test]
    fn test_assigner_is_reusable() {
        let assigner = SpectrumAssigner::from_config(Grid::c_band(), None);
        let client = ClientInput::new().with_a_end_slot_width(4);
        let available = spectrum::all_free(768);
        let first = assigner
            .assign(&[Capability::default()], &client, None, &available)
            .unwrap();
        let second = assigner
            .assign(&[Capability::default()], &client, None, &available)
            .unwrap();
        assert_eq!(first, second);
        assert!(first.range().is_some());
    }
}
