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

//! Client-facing spectrum constraints.
//!
//! The external service-creation request arrives through an API adapter
//! (out of scope here) and is translated into a [`ClientInput`]: an optional
//! slot-width hint per service end, expressed in 12.5 GHz logical slot
//! units, plus two kinds of wish-list intervals over physical frequencies.
//! Intersection intervals are soft preferences: the candidates are narrowed
//! to whatever part of them is free. Subset intervals are hard
//! requirements: an interval counts only when it is free end to end, and
//! the chosen spectrum must lie inside one. An empty wish-list of either
//! kind restricts nothing.

use crate::{error::ClientInputError, frequency::Frequency};
use flexgrid_core::math::decimal::Decimal;
use smallvec::SmallVec;

/// The logical slot unit external protocols express widths in, 12.5 GHz.
#[inline]
pub fn logical_slot_width_ghz() -> Decimal {
    Decimal::new(125, 1)
}

/// A client-facing physical frequency interval `[start, end)`.
///
/// An absent end means "to the end of the grid".
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FrequencyInterval {
    start: Frequency,
    end: Option<Frequency>,
}

impl FrequencyInterval {
    /// Creates an interval covering `[start, end)`.
    #[inline]
    pub const fn new(start: Frequency, end: Frequency) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    /// Creates an interval from `start` to the end of the grid.
    #[inline]
    pub const fn to_end_of_grid(start: Frequency) -> Self {
        Self { start, end: None }
    }

    /// Returns the inclusive start frequency.
    #[inline]
    pub const fn start(&self) -> Frequency {
        self.start
    }

    /// Returns the exclusive end frequency, if bounded.
    #[inline]
    pub const fn end(&self) -> Option<Frequency> {
        self.end
    }
}

/// One spectrum-assignment request as seen from the client side.
///
/// # Examples
///
/// ```rust
/// # use flexgrid_model::client::ClientInput;
/// # use flexgrid_core::math::decimal::Decimal;
///
/// // Four 12.5 GHz logical slots = 50 GHz = 8 slots on a 6.25 GHz grid.
/// let input = ClientInput::new().with_a_end_slot_width(4);
/// assert_eq!(input.service_width_slots(Decimal::new(625, 2)).unwrap(), 8);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct ClientInput {
    a_end_slot_width: Option<u32>,
    z_end_slot_width: Option<u32>,
    // Most requests carry zero or one interval per wish-list kind.
    intersection_intervals: SmallVec<[FrequencyInterval; 2]>,
    subset_intervals: SmallVec<[FrequencyInterval; 2]>,
}

impl ClientInput {
    /// Creates an empty request: no width hints, no wish-lists.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the slot-width hint of the A end, in logical slot units.
    #[inline]
    pub fn with_a_end_slot_width(mut self, slots: u32) -> Self {
        self.a_end_slot_width = Some(slots);
        self
    }

    /// Sets the slot-width hint of the Z end, in logical slot units.
    #[inline]
    pub fn with_z_end_slot_width(mut self, slots: u32) -> Self {
        self.z_end_slot_width = Some(slots);
        self
    }

    /// Adds a soft preference interval (intersection wish-list).
    #[inline]
    pub fn with_intersection_interval(mut self, interval: FrequencyInterval) -> Self {
        self.intersection_intervals.push(interval);
        self
    }

    /// Adds a hard requirement interval (subset wish-list).
    #[inline]
    pub fn with_subset_interval(mut self, interval: FrequencyInterval) -> Self {
        self.subset_intervals.push(interval);
        self
    }

    /// Returns the soft preference intervals.
    #[inline]
    pub fn intersection_intervals(&self) -> &[FrequencyInterval] {
        &self.intersection_intervals
    }

    /// Returns the hard requirement intervals.
    #[inline]
    pub fn subset_intervals(&self) -> &[FrequencyInterval] {
        &self.subset_intervals
    }

    /// Resolves the service width in working-grid slots.
    ///
    /// The hints of both ends must agree when both are present; the agreed
    /// hint, multiplied by the 12.5 GHz logical slot unit, must convert to a
    /// non-empty, exact number of slots on the working grid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use flexgrid_model::client::ClientInput;
    /// # use flexgrid_model::error::ClientInputError;
    /// # use flexgrid_core::math::decimal::Decimal;
    ///
    /// let conflicting = ClientInput::new()
    ///     .with_a_end_slot_width(4)
    ///     .with_z_end_slot_width(8);
    /// assert!(matches!(
    ///     conflicting.service_width_slots(Decimal::new(625, 2)),
    ///     Err(ClientInputError::ConflictingConstraints { a_end: 4, z_end: 8 })
    /// ));
    /// ```
    pub fn service_width_slots(
        &self,
        working_granularity_ghz: Decimal,
    ) -> Result<usize, ClientInputError> {
        let hint = match (self.a_end_slot_width, self.z_end_slot_width) {
            (Some(a_end), Some(z_end)) if a_end != z_end => {
                return Err(ClientInputError::ConflictingConstraints { a_end, z_end });
            }
            (Some(a_end), _) => a_end,
            (None, Some(z_end)) => z_end,
            (None, None) => return Err(ClientInputError::MissingSlotWidth),
        };

        let requested_ghz = logical_slot_width_ghz().scale_by(hint as i128);
        match requested_ghz.div_exact(working_granularity_ghz) {
            Some(slots) if slots > 0 => Ok(slots as usize),
            _ => Err(ClientInputError::InvalidSlotWidth {
                requested_ghz,
                granularity_ghz: working_granularity_ghz,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn freq(mantissa: i128, exponent: u32) -> Frequency {
        Frequency::thz(Decimal::new(mantissa, exponent))
    }

    #[test]
    fn test_interval_accessors() {
        let bounded = FrequencyInterval::new(freq(1930, 1), freq(1935, 1));
        assert_eq!(bounded.start(), freq(1930, 1));
        assert_eq!(bounded.end(), Some(freq(1935, 1)));

        let open = FrequencyInterval::to_end_of_grid(freq(1950, 1));
        assert_eq!(open.end(), None);
    }

    #[test]
    fn test_width_from_single_end() {
        let granularity = Decimal::new(625, 2);
        let from_a = ClientInput::new().with_a_end_slot_width(4);
        let from_z = ClientInput::new().with_z_end_slot_width(4);
        assert_eq!(from_a.service_width_slots(granularity).unwrap(), 8);
        assert_eq!(from_z.service_width_slots(granularity).unwrap(), 8);
    }

    #[test]
    fn test_width_agreeing_ends() {
        let input = ClientInput::new()
            .with_a_end_slot_width(8)
            .with_z_end_slot_width(8);
        // 8 * 12.5 GHz = 100 GHz = 16 slots of 6.25 GHz.
        assert_eq!(
            input.service_width_slots(Decimal::new(625, 2)).unwrap(),
            16
        );
    }

    #[test]
    fn test_width_conflicting_ends() {
        let input = ClientInput::new()
            .with_a_end_slot_width(4)
            .with_z_end_slot_width(6);
        assert_eq!(
            input.service_width_slots(Decimal::new(625, 2)),
            Err(ClientInputError::ConflictingConstraints { a_end: 4, z_end: 6 })
        );
    }

    #[test]
    fn test_width_missing() {
        assert_eq!(
            ClientInput::new().service_width_slots(Decimal::new(625, 2)),
            Err(ClientInputError::MissingSlotWidth)
        );
    }

    #[test]
    fn test_width_not_a_multiple() {
        // 12.5 GHz on a 50 GHz working grid is a quarter slot.
        let input = ClientInput::new().with_a_end_slot_width(1);
        assert!(matches!(
            input.service_width_slots(Decimal::from_int(50)),
            Err(ClientInputError::InvalidSlotWidth { .. })
        ));
    }

    #[test]
    fn test_width_zero_hint_is_invalid() {
        let input = ClientInput::new().with_a_end_slot_width(0);
        assert!(matches!(
            input.service_width_slots(Decimal::new(625, 2)),
            Err(ClientInputError::InvalidSlotWidth { .. })
        ));
    }

    #[test]
    fn test_wishlist_accumulation() {
        let input = ClientInput::new()
            .with_intersection_interval(FrequencyInterval::new(freq(1930, 1), freq(1935, 1)))
            .with_subset_interval(FrequencyInterval::to_end_of_grid(freq(1950, 1)));
        assert_eq!(input.intersection_intervals().len(), 1);
        assert_eq!(input.subset_intervals().len(), 1);
    }
}
